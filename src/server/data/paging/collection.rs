//! Collection schemas for the paging engine.
//!
//! A `Collection` names the fields of one entity that callers may filter and sort on and
//! the field used as fallback sort. Resolving a parsed filter against it turns API field
//! names into SeaORM columns and raw strings into typed values, rejecting anything the
//! schema does not allow before a query is built.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, ExprTrait, LikeExpr, Order},
    ColumnTrait, Condition, EntityTrait, Value,
};

use crate::server::{
    error::paging::PagingError,
    model::paging::{Filter, NormalizedFilter, SortClause, SortDirection},
};

/// Escape character of substring patterns.
const LIKE_ESCAPE: char = '\\';

/// Value type of a filterable field.
///
/// Determines how raw filter strings are coerced and whether substring matching is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Text column, supports `where` and `like`.
    Text,
    /// Integer column, supports `where`.
    Integer,
    /// Boolean column accepting `true`/`false`/`1`/`0`, supports `where`.
    Boolean,
    /// UTC timestamp column accepting RFC 3339 values, supports `where`.
    Timestamp,
}

impl FieldKind {
    /// Converts a raw filter value into a typed database value.
    ///
    /// # Returns
    /// - `Ok(Value)` - Converted value
    /// - `Err(PagingError::InvalidFilterValue)` - Raw value does not parse as this kind
    pub fn coerce(self, field: &str, raw: &str) -> Result<Value, PagingError> {
        let invalid = || PagingError::InvalidFilterValue {
            field: field.to_string(),
            value: raw.to_string(),
        };

        let value = match self {
            Self::Text => Value::from(raw.to_string()),
            Self::Integer => Value::from(raw.trim().parse::<i64>().map_err(|_| invalid())?),
            Self::Boolean => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => Value::from(true),
                "false" | "0" => Value::from(false),
                _ => return Err(invalid()),
            },
            Self::Timestamp => {
                let parsed = DateTime::parse_from_rfc3339(raw.trim()).map_err(|_| invalid())?;
                Value::from(parsed.with_timezone(&Utc))
            }
        };

        Ok(value)
    }
}

/// Column and type of one exposed field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec<E: EntityTrait> {
    pub column: E::Column,
    pub kind: FieldKind,
}

/// Filter and sort schema of one entity.
#[derive(Debug, Clone)]
pub struct Collection<E: EntityTrait> {
    name: &'static str,
    fallback_sort: &'static str,
    fields: BTreeMap<&'static str, FieldSpec<E>>,
}

impl<E: EntityTrait> Collection<E> {
    /// Creates a collection with an integer identity field that is also its fallback sort.
    ///
    /// # Arguments
    /// - `name` - Collection name used for registry lookup and error messages
    /// - `identity` - API name of the identity field (usually `id`)
    /// - `identity_column` - Column backing the identity field
    pub fn new(name: &'static str, identity: &'static str, identity_column: E::Column) -> Self {
        Self::with_identity(name, identity, identity_column, FieldKind::Integer)
    }

    /// Creates a collection whose identity field has the given kind, e.g. a text slug key.
    ///
    /// The identity field is the fallback sort.
    pub fn with_identity(
        name: &'static str,
        identity: &'static str,
        identity_column: E::Column,
        identity_kind: FieldKind,
    ) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(
            identity,
            FieldSpec {
                column: identity_column,
                kind: identity_kind,
            },
        );

        Self {
            name,
            fallback_sort: identity,
            fields,
        }
    }

    /// Exposes another field for filtering and sorting.
    pub fn field(mut self, name: &'static str, column: E::Column, kind: FieldKind) -> Self {
        self.fields.insert(name, FieldSpec { column, kind });
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// API name of the field used when no `orderby` is given.
    pub fn fallback_sort(&self) -> &'static str {
        self.fallback_sort
    }

    pub fn field_spec(&self, name: &str) -> Option<&FieldSpec<E>> {
        self.fields.get(name)
    }

    /// Builds the `WHERE` condition for a parsed filter.
    ///
    /// # Returns
    /// - `Ok(Condition)` - Conjunction of all predicates (empty when the filter is empty)
    /// - `Err(PagingError::UnknownFilterField)` - Field not exposed by this collection
    /// - `Err(PagingError::ContainsOnNonText)` - Substring filter on a non-text field
    /// - `Err(PagingError::InvalidFilterValue)` - Value does not fit the field type
    pub fn condition(&self, filter: &NormalizedFilter) -> Result<Condition, PagingError> {
        let mut condition = Condition::all();

        for (field, predicate) in filter.iter() {
            let spec = self
                .field_spec(field)
                .ok_or_else(|| PagingError::UnknownFilterField {
                    collection: self.name.to_string(),
                    field: field.clone(),
                })?;

            condition = match predicate {
                Filter::Exact(raw) => condition.add(spec.column.eq(spec.kind.coerce(field, raw)?)),
                Filter::Contains(raw) => {
                    if spec.kind != FieldKind::Text {
                        return Err(PagingError::ContainsOnNonText {
                            field: field.clone(),
                        });
                    }
                    condition.add(Expr::col(spec.column).like(contains_pattern(raw)))
                }
            };
        }

        Ok(condition)
    }

    /// Resolves a sort clause into a column and order.
    ///
    /// # Returns
    /// - `Ok((column, order))` - Sort column and direction
    /// - `Err(PagingError::UnknownSortField)` - Field not exposed by this collection
    pub fn order(&self, sort: &SortClause) -> Result<(E::Column, Order), PagingError> {
        let spec = self
            .field_spec(&sort.field)
            .ok_or_else(|| PagingError::UnknownSortField {
                collection: self.name.to_string(),
                field: sort.field.clone(),
            })?;

        let order = match sort.direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        };

        Ok((spec.column, order))
    }
}

/// Builds a `LIKE` pattern matching `needle` anywhere, with `%`, `_` and the escape
/// character matched literally.
fn contains_pattern(needle: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(ch);
    }
    pattern.push('%');

    LikeExpr::new(pattern).escape(LIKE_ESCAPE)
}
