use proptest::prelude::*;
use sqlhint_core::{
    completion_items, ColumnSchema, CompletionOptions, CompletionRequest, Dialect, Position,
    SchemaMetadata, SchemaTable,
};

fn schema_with(table: &str, columns: &[String]) -> SchemaMetadata {
    SchemaMetadata {
        schema: None,
        tables: vec![SchemaTable {
            name: table.to_string(),
            schema: None,
            columns: columns
                .iter()
                .map(|name| ColumnSchema {
                    name: name.clone(),
                    data_type: "text".to_string(),
                    is_primary_key: None,
                    is_foreign_key: None,
                })
                .collect(),
        }],
    }
}

fn request(
    sql: String,
    dialect: Dialect,
    position: Position,
    schema: SchemaMetadata,
) -> CompletionRequest {
    CompletionRequest {
        sql,
        dialect,
        position,
        schema: Some(schema),
        options: CompletionOptions::default(),
    }
}

fn dialect_strategy() -> impl Strategy<Value = Dialect> {
    prop_oneof![Just(Dialect::Pgsql), Just(Dialect::Mysql), Just(Dialect::Cql)]
}

proptest! {
    #[test]
    fn arbitrary_buffers_complete_without_error_and_deterministically(
        sql in "[a-zA-Z0-9 ,.;'\"()*=\n]{0,80}",
        line in 1u32..6,
        column in 1u32..100,
        dialect in dialect_strategy(),
    ) {
        let request = request(
            sql,
            dialect,
            Position::new(line, column),
            schema_with("users", &["id".to_string()]),
        );

        let first = completion_items(&request);
        let second = completion_items(&request);

        prop_assert!(first.error.is_none());
        prop_assert_eq!(&first.rule, &second.rule);
        prop_assert_eq!(&first.suggestions, &second.suggestions);

        for item in &first.suggestions {
            prop_assert_eq!(item.range.start_line_number, item.range.end_line_number);
            prop_assert!(item.range.start_column <= item.range.end_column);
        }
    }

    #[test]
    fn qualified_columns_match_the_table(
        table in "[a-z]{1,8}",
        columns in prop::collection::vec("[a-z]{1,8}", 1..6),
        dialect in dialect_strategy(),
    ) {
        // A table named like the keyword puts the line on the JOIN path.
        prop_assume!(!table.contains("join"));

        let sql = format!("select * from {table}.");
        let column = sql.chars().count() as u32 + 1;
        let result = completion_items(&request(
            sql,
            dialect,
            Position::new(1, column),
            schema_with(&table, &columns),
        ));

        let labels: Vec<_> = result.suggestions.iter().map(|item| item.label.clone()).collect();
        prop_assert_eq!(labels, columns);
    }

    #[test]
    fn insert_column_list_matches_the_table(
        table in "[a-z]{1,8}",
        columns in prop::collection::vec("[a-z]{1,8}", 1..6),
    ) {
        let sql = format!("insert into {table} (");
        let column = sql.chars().count() as u32 + 1;
        let result = completion_items(&request(
            sql,
            Dialect::Pgsql,
            Position::new(1, column),
            schema_with(&table, &columns),
        ));

        let labels: Vec<_> = result.suggestions.iter().map(|item| item.label.clone()).collect();
        prop_assert_eq!(labels, columns);
    }
}
