//! Производные колонки SELECT
//!
//! Слияние результатов с разных шардов требует колонок, которых нет в
//! исходном запросе: COUNT и SUM для AVG, а также колонок ORDER BY и
//! GROUP BY, не попавших в список SELECT. Инжектор добавляет их одним
//! `ItemsToken` в конец списка SELECT.

use crate::parser::ast::{
    AggregationSelectItem, AggregationType, ItemsToken, OrderItem, SelectItem, SelectStatement,
    SqlToken,
};
use crate::rule::ShardingTableMetaData;

/// Вид производной колонки и префикс ее псевдонима
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedColumn {
    AvgCount,
    AvgSum,
    OrderBy,
    GroupBy,
}

impl DerivedColumn {
    pub fn prefix(&self) -> &'static str {
        match self {
            DerivedColumn::AvgCount => "AVG_DERIVED_COUNT_",
            DerivedColumn::AvgSum => "AVG_DERIVED_SUM_",
            DerivedColumn::OrderBy => "ORDER_BY_DERIVED_",
            DerivedColumn::GroupBy => "GROUP_BY_DERIVED_",
        }
    }

    pub fn alias(&self, index: usize) -> String {
        format!("{}{}", self.prefix(), index)
    }
}

pub struct DerivedColumnInjector<'a> {
    table_metadata: &'a dyn ShardingTableMetaData,
}

impl<'a> DerivedColumnInjector<'a> {
    pub fn new(table_metadata: &'a dyn ShardingTableMetaData) -> Self {
        Self { table_metadata }
    }

    /// Добавляет производные колонки; повторный вызов ничего не меняет
    pub fn inject(&self, statement: &mut SelectStatement) {
        if statement.derived_columns_appended {
            return;
        }
        statement.derived_columns_appended = true;

        let mut items_token = ItemsToken::new(statement.select_list_last_position);
        append_avg_derived_columns(statement, &mut items_token);

        let mut order_by_items = std::mem::take(&mut statement.order_by_items);
        self.append_derived_order_columns(
            statement,
            &mut order_by_items,
            DerivedColumn::OrderBy,
            &mut items_token,
        );
        statement.order_by_items = order_by_items;

        let mut group_by_items = std::mem::take(&mut statement.group_by_items);
        self.append_derived_order_columns(
            statement,
            &mut group_by_items,
            DerivedColumn::GroupBy,
            &mut items_token,
        );
        statement.group_by_items = group_by_items;

        if !items_token.items.is_empty() {
            log::debug!("Appending derived columns: {:?}", items_token.items);
            statement.base.add_sql_token(SqlToken::Items(items_token));
        }
        append_derived_order_by(statement);
    }

    fn append_derived_order_columns(
        &self,
        statement: &SelectStatement,
        order_items: &mut [OrderItem],
        derived_column: DerivedColumn,
        items_token: &mut ItemsToken,
    ) {
        let mut derived_index = 0;
        for order_item in order_items.iter_mut() {
            if self.contains_item(statement, order_item) {
                continue;
            }
            let Some(qualified_name) = order_item.qualified_name() else {
                continue;
            };
            let alias = derived_column.alias(derived_index);
            derived_index += 1;
            items_token.items.push(format!("{} AS {} ", qualified_name, alias));
            order_item.alias = Some(alias);
        }
    }

    fn contains_item(&self, statement: &SelectStatement, order_item: &OrderItem) -> bool {
        if order_item.index.is_some() {
            return true;
        }
        if self.contains_item_in_star_select_items(statement, order_item) {
            return true;
        }
        statement
            .items
            .iter()
            .any(|item| is_same_select_item(item, order_item))
    }

    fn contains_item_in_star_select_items(&self, statement: &SelectStatement, order_item: &OrderItem) -> bool {
        statement.items.iter().any(|item| match item {
            SelectItem::Star { owner: None } => true,
            SelectItem::Star { owner: Some(star_owner) } => match (&order_item.owner, &order_item.name) {
                (Some(owner), _) => star_owner.eq_ignore_ascii_case(owner),
                (None, Some(name)) => statement
                    .base
                    .tables
                    .find(star_owner)
                    .is_some_and(|table| self.table_metadata.contains_column(&table.name, name)),
                (None, None) => false,
            },
            _ => false,
        })
    }
}

fn is_same_select_item(item: &SelectItem, order_item: &OrderItem) -> bool {
    if matches!(item, SelectItem::Star { .. }) {
        return false;
    }
    match (item.alias(), order_item.alias.as_deref()) {
        (Some(alias), Some(order_alias)) => alias.eq_ignore_ascii_case(order_alias),
        (Some(_), None) => false,
        (None, _) => order_item
            .qualified_name()
            .is_some_and(|name| item.expression().eq_ignore_ascii_case(&name)),
    }
}

/// COUNT и SUM с тем же аргументом для каждого AVG
fn append_avg_derived_columns(statement: &mut SelectStatement, items_token: &mut ItemsToken) {
    let mut derived_index = 0;
    for item in statement.items.iter_mut() {
        let SelectItem::Aggregation(aggregation) = item else {
            continue;
        };
        if aggregation.aggregation_type != AggregationType::Avg {
            continue;
        }
        for (aggregation_type, derived_column) in [
            (AggregationType::Count, DerivedColumn::AvgCount),
            (AggregationType::Sum, DerivedColumn::AvgSum),
        ] {
            let alias = derived_column.alias(derived_index);
            let derived = AggregationSelectItem::new(
                aggregation_type,
                aggregation.inner_expression.clone(),
                Some(alias.clone()),
            );
            items_token.items.push(format!("{} AS {} ", derived.expression(), alias));
            aggregation.derived_aggregation_items.push(derived);
        }
        derived_index += 1;
    }
}

/// GROUP BY без ORDER BY сортирует так же, как группирует
fn append_derived_order_by(statement: &mut SelectStatement) {
    if statement.group_by_items.is_empty() || !statement.order_by_items.is_empty() {
        return;
    }
    statement.order_by_items = statement.group_by_items.clone();
    statement.base.add_sql_token(SqlToken::OrderBy {
        begin_position: statement.group_by_last_position,
    });
}
