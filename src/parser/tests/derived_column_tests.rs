use super::{parse_select, rule_config};
use crate::dialect::DatabaseType;
use crate::parser::ast::{ItemsToken, SelectItem, SqlToken};
use crate::parser::statement::derived::DerivedColumn;
use crate::parser::statement::DerivedColumnInjector;
use crate::rule::StaticTableMetaData;

fn items_tokens(tokens: &[SqlToken]) -> Vec<&ItemsToken> {
    tokens
        .iter()
        .filter_map(|token| match token {
            SqlToken::Items(items) => Some(items),
            _ => None,
        })
        .collect()
}

#[test]
fn test_derived_aliases() {
    assert_eq!(DerivedColumn::AvgCount.alias(0), "AVG_DERIVED_COUNT_0");
    assert_eq!(DerivedColumn::AvgSum.alias(1), "AVG_DERIVED_SUM_1");
    assert_eq!(DerivedColumn::OrderBy.alias(2), "ORDER_BY_DERIVED_2");
    assert_eq!(DerivedColumn::GroupBy.prefix(), "GROUP_BY_DERIVED_");
}

#[test]
fn test_avg_gets_count_and_sum() {
    let statement = parse_select(DatabaseType::MySQL, "SELECT AVG(price) FROM t_order");
    let tokens = items_tokens(&statement.base.sql_tokens);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].begin_position, 18);
    assert_eq!(
        tokens[0].items,
        vec![
            "COUNT(price) AS AVG_DERIVED_COUNT_0 ".to_string(),
            "SUM(price) AS AVG_DERIVED_SUM_0 ".to_string(),
        ]
    );
    let SelectItem::Aggregation(avg) = &statement.items[0] else {
        panic!("expected aggregation, got {:?}", statement.items[0]);
    };
    assert_eq!(avg.derived_aggregation_items.len(), 2);
    assert_eq!(
        avg.derived_aggregation_items[1].alias.as_deref(),
        Some("AVG_DERIVED_SUM_0")
    );
}

#[test]
fn test_group_by_without_order_by_adds_order_by_token() {
    let statement = parse_select(DatabaseType::MySQL, "SELECT id FROM t GROUP BY id");
    assert_eq!(statement.group_by_last_position, 28);
    assert_eq!(
        statement.base.sql_tokens,
        vec![SqlToken::OrderBy { begin_position: 28 }]
    );
    assert_eq!(statement.order_by_items, statement.group_by_items);
}

#[test]
fn test_group_by_with_rollup_ends_after_rollup() {
    let statement = parse_select(DatabaseType::MySQL, "SELECT id FROM t GROUP BY id WITH ROLLUP");
    assert_eq!(statement.group_by_last_position, 40);
}

#[test]
fn test_missing_order_by_column_is_derived() {
    let statement = parse_select(DatabaseType::MySQL, "SELECT user_id FROM t_order ORDER BY status");
    let tokens = items_tokens(&statement.base.sql_tokens);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].begin_position, 15);
    assert_eq!(tokens[0].items, vec!["status AS ORDER_BY_DERIVED_0 ".to_string()]);
    assert_eq!(
        statement.order_by_items[0].alias.as_deref(),
        Some("ORDER_BY_DERIVED_0")
    );
}

#[test]
fn test_missing_group_by_column_is_derived() {
    let statement = parse_select(
        DatabaseType::MySQL,
        "SELECT COUNT(*) FROM t_order GROUP BY user_id",
    );
    assert_eq!(
        statement.base.sql_tokens,
        vec![
            SqlToken::Items(ItemsToken {
                begin_position: 16,
                items: vec!["user_id AS GROUP_BY_DERIVED_0 ".to_string()],
                first_of_items_special: false,
            }),
            SqlToken::table(21, "t_order"),
            SqlToken::OrderBy { begin_position: 45 },
        ]
    );
    assert_eq!(
        statement.order_by_items[0].alias.as_deref(),
        Some("GROUP_BY_DERIVED_0")
    );
}

#[test]
fn test_star_covers_order_items() {
    let statement = parse_select(DatabaseType::MySQL, "SELECT * FROM t_order ORDER BY status");
    assert!(items_tokens(&statement.base.sql_tokens).is_empty());
}

#[test]
fn test_owner_star_covers_known_columns() {
    let statement = parse_select(
        DatabaseType::MySQL,
        "SELECT o.* FROM t_order o ORDER BY status, o.user_id, amount",
    );
    let tokens = items_tokens(&statement.base.sql_tokens);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].items, vec!["amount AS ORDER_BY_DERIVED_0 ".to_string()]);
}

#[test]
fn test_injection_is_idempotent() {
    let mut statement = parse_select(
        DatabaseType::MySQL,
        "SELECT AVG(price) FROM t_order GROUP BY user_id",
    );
    let snapshot = statement.clone();
    let metadata = StaticTableMetaData::new(&rule_config());
    DerivedColumnInjector::new(&metadata).inject(&mut statement);
    assert_eq!(statement, snapshot);
}
