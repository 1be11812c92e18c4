use oxide_clause::builder::{and, column_value, escape_for_like, in_list, like_l, literal, sql_func};
use oxide_clause::{col, to_sql, Clause, Column};
use oxide_clause_mysql::{on_duplicate_key_update, MySqlDialect};

fn render<C: Clause>(clause: &C) -> String {
    to_sql(clause, &MySqlDialect).unwrap()
}

#[test]
fn test_backtick_quoting_in_expressions() {
    let expr = and([
        in_list(Column::qualified("users", "id"), vec![1, 2]),
        like_l(col("name"), "A%"),
    ]);
    assert_eq!(render(&expr), "(`users`.`id` IN (1,2) AND `name` LIKE 'A%')");
}

#[test]
fn test_escaped_like_pattern() {
    let pattern = format!("{}%", escape_for_like("50%_off"));
    assert_eq!(
        render(&like_l(col("title"), &pattern)),
        r"`title` LIKE '50\\%\\_off%'"
    );
}

#[test]
fn test_column_value_uses_backticks() {
    assert_eq!(
        render(&column_value(Column::qualified("t", "c"))),
        "VALUES(`t`.`c`)"
    );
}

#[test]
fn test_function_arguments_are_escaped() {
    let expr = sql_func("CONCAT", [literal("a\\"), literal("'b")]);
    assert_eq!(render(&expr), r"CONCAT('a\\','\'b')");
}

#[test]
fn test_upsert_tail() {
    let clause = on_duplicate_key_update([col("name"), col("email")]);
    assert_eq!(
        render(&clause),
        "ON DUPLICATE KEY UPDATE `name`=VALUES(`name`),`email`=VALUES(`email`)"
    );
}
