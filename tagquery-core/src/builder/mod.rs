//! Query builder module

pub mod common;
pub mod delete;
pub mod insert;
pub mod join;
pub mod select;
pub mod update;
pub mod where_clause;

// Re-export types from submodules
pub use common::{Query, QueryProvider, WhereConnector};
pub use insert::insert_many;
pub use join::{JoinBuilder, JoinModel};

use crate::{Model, Operator, Result, Value};

impl QueryProvider for Model {
    fn view_all(&self, table: &str) -> Result<Query> {
        select::view_all(self, table)
    }

    fn insert(&self, table: &str) -> Result<Query> {
        insert::insert(self, table)
    }

    fn delete(&self, table: &str) -> Result<Query> {
        delete::delete(table)
    }

    fn update(&self, table: &str, primary: &str) -> Result<Query> {
        update::update(self, table, primary)
    }

    fn update_where(&self, table: &str, primary: &str, primary_value: Value) -> Result<Query> {
        update::update_where(self, table, primary, primary_value)
    }

    fn where_clause(&self, operator: Operator, connector: WhereConnector) -> Result<Query> {
        where_clause::where_clause(self, &operator, connector)
    }
}
