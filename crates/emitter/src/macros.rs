#[macro_export]
macro_rules! clause {
    ($connective:expr, $child:expr) => {
        $crate::clause::BooleanClause::new($connective, $child.into())
    };
}

#[macro_export]
macro_rules! term {
    ($field:expr, $value:expr) => {
        $crate::search::query::SearchQuery::term($field, $value)
    };
}

#[macro_export]
macro_rules! comparison {
    ($field:expr, $operator:expr, $value:expr) => {
        $crate::compile::predicate::Predicate::comparison($field, $operator, $value)
    };
}
