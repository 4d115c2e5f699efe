use super::init_logger;
use crate::{BuilderConfig, QueryBuilder};

const DOMAIN: &str = "https://www.google.com?";

#[test]
fn test_build_without_campaign() {
    init_logger();
    let result = QueryBuilder::default().build(
        DOMAIN,
        params! {
            "bundle" => "com.dev.test",
            "af_userid" => "123456789",
        },
    );

    assert_eq!(
        result,
        "https://www.google.com?af_userid=123456789&bundle=com.dev.test&notId=null&sub10=firstOpen"
    );
    assert_eq!(result.split('&').count(), 4);
}

#[test]
fn test_build_with_campaign_pair() {
    init_logger();
    let result = QueryBuilder::default().build(
        DOMAIN,
        params! {
            "bundle" => "com.dev.test",
            "af_userid" => "123456789",
            "campaign_1" => "myapp://test1_push_test2_test3_test4_test5_test6_test7_test8_test9_test10_test11",
            "campaign_2" => "a_b_c",
            "campaign_id" => "CAMPAIGN_ID 1",
        },
    );

    assert!(result.starts_with(DOMAIN));
    assert!(result.contains("bundle=com.dev.test"));
    assert!(result.contains("af_userid=123456789"));
    assert!(result.contains("notId=null"));
    assert!(result.contains("sub10=firstOpen"));
    assert!(result.contains(
        "campaign=myapp%3A%2F%2Ftest1_push_test2_test3_test4_test5_test6_test7_test8_test9_test10_test11"
    ));
    assert!(result.contains("push=push"));
    assert!(result.contains("sub1=test1"));
    assert!(result.contains("sub2=test2"));
    assert!(result.contains("sub11=test11"));
    assert!(result.contains("campaign_id=CAMPAIGN_ID%201"));
    assert!(!result.contains("campaign_1="));
    assert!(!result.contains("campaign_2="));
    assert!(!result.contains("sub10=test10"));
    assert!(!result.ends_with('&'));
    assert!(!result.contains(' '));
}

#[test]
fn test_build_with_placeholder_campaign() {
    init_logger();
    let result = QueryBuilder::default().build(
        DOMAIN,
        params! {
            "bundle" => "com.dev.test",
            "af_userid" => "123456789",
            "campaign" => "null",
            "campaign_id" => "CAMPAIGN_ID 1",
        },
    );

    assert!(result.contains("campaign=null"));
    assert!(result.contains("push=null"));
    assert!(result.contains("sub1=null"));
    assert!(result.contains("sub4=&"));
    assert!(result.contains("sub5=&"));
    assert!(result.contains("campaign_id=CAMPAIGN_ID%201"));
    assert!(!result.contains("sub11="));
    assert!(!result.ends_with('&'));
    assert!(!result.contains(' '));
}

#[test]
fn test_build_output_is_ordered_by_key() {
    let result = QueryBuilder::default().build(
        "?",
        params! {
            "campaign" => "a_b",
            "Z" => "upper",
        },
    );

    assert_eq!(
        result,
        "?Z=upper&campaign=a_b&notId=null&push=b&sub1=a&sub10=firstOpen\
         &sub2=&sub3=&sub4=&sub5=&sub6=&sub7=&sub8=&sub9="
    );
}

#[test]
fn test_get_value() {
    let data = "https://www.google.com?bundle=com.a.b&push=test&sub1=tt";
    assert_eq!(QueryBuilder::default().get_param_value(data, "push"), "test");
}

#[test]
fn test_replace_value() {
    let data = "https://www.google.com?bundle=com.a.b&push=test&sub1=tt&notId=null";
    let result = QueryBuilder::default().replace_param_value(data, "notId", "a123b");

    assert_eq!(
        result,
        "https://www.google.com?bundle=com.a.b&notId=a123b&push=test&sub1=tt"
    );
}

#[test]
fn test_replace_value_legacy_keys() {
    let config: BuilderConfig = "[query]\nlegacy_replace_keys = true".parse().unwrap();
    let builder = QueryBuilder::new(config);
    let data = "https://www.google.com?bundle=com.a.b&push=test&sub1=tt&notId=null";
    let result = builder.replace_param_value(data, "notId", "a123b");

    assert_eq!(
        result,
        "https://www.google.com?notId=a123b&otId==null&ub1==tt&undle==com.a.b&ush==test"
    );
    assert!(!result.contains("notId=null"));
}

#[test]
fn test_replace_then_get() {
    let builder = QueryBuilder::default();
    let query = builder.build(DOMAIN, params! { "campaign" => "myapp://x_1" });
    let query = builder.replace_param_value(&query, "push", "0");

    assert_eq!(builder.get_param_value(&query, "push"), "0");
    assert_eq!(builder.get_param_value(&query, "sub1"), "x");
    assert_eq!(builder.get_param_value(&query, "campaign"), "myapp%3A%2F%2Fx_1");
}
