//! OVH Provider 集成测试
//!
//! 运行方式:
//! ```bash
//! FNF_OVH_ENDPOINT=ovh-eu FNF_OVH_APP_KEY=xxx FNF_OVH_APP_SECRET=xxx \
//! FNF_OVH_CONSUMER_KEY=xxx FNF_OVH_DOMAIN=example.com FNF_DEFAULT_EMAIL=me@example.org \
//!     cargo test -p mailfwd-provider --test ovh_test -- --ignored --nocapture --test-threads=1
//! ```

mod common;

use common::{OVH_VARS, TestContext, find_by_from, generate_test_local_part};
use mailfwd_provider::ProviderError;

#[tokio::test]
#[ignore]
async fn test_ovh_list() {
    for var in OVH_VARS {
        skip_if_no_credentials!(var);
    }

    let Some(ctx) = TestContext::ovh() else {
        panic!("创建测试上下文失败");
    };
    let rules = require_ok!(ctx.provider.list().await, "list 调用失败");

    assert!(rules.iter().all(|r| !r.id.is_empty()), "每条规则都应带 id");

    println!("✓ list 测试通过，共 {} 条规则", rules.len());
}

#[tokio::test]
#[ignore]
async fn test_ovh_create_list_delete() {
    for var in OVH_VARS {
        skip_if_no_credentials!(var);
    }

    let Some(ctx) = TestContext::ovh() else {
        panic!("创建测试上下文失败");
    };
    let local = generate_test_local_part();
    let from = format!("{local}@{}", ctx.domain);

    // 1. 创建
    require_ok!(
        ctx.provider.create(&local, &ctx.default_email).await,
        "create 调用失败"
    );

    // 2. 列表中应出现，且位于最前
    let rules = require_ok!(ctx.provider.list().await, "list 调用失败");
    let created = find_by_from(&rules, &from).cloned();
    assert!(created.is_some(), "新规则应出现在列表中");
    assert_eq!(rules.first().map(|r| r.from.as_str()), Some(from.as_str()));

    let Some(created) = created else { return };
    assert_eq!(created.to, ctx.default_email);

    // 3. 删除
    let result = ctx.provider.delete(&created.id).await;
    if result.is_err() {
        ctx.cleanup(&from).await;
    }
    require_ok!(result, "delete 调用失败");

    let rules = require_ok!(ctx.provider.list().await, "list 调用失败");
    assert!(find_by_from(&rules, &from).is_none(), "规则应已删除");

    println!("✓ create/list/delete 测试通过: {from}");
}

#[tokio::test]
#[ignore]
async fn test_ovh_delete_unknown_id() {
    for var in OVH_VARS {
        skip_if_no_credentials!(var);
    }

    let Some(ctx) = TestContext::ovh() else {
        panic!("创建测试上下文失败");
    };
    let result = ctx.provider.delete("0").await;

    assert!(
        matches!(
            result,
            Err(ProviderError::RedirectionNotFound { .. } | ProviderError::InvalidParameter { .. })
        ),
        "删除不存在的规则应失败: {result:?}"
    );
}
