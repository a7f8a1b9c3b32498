//! Resolution of client-supplied sort and filter strings into typed,
//! allow-listed orderings and predicates.
//!
//! Nothing past this module handles a field name as a string: storage
//! adapters evaluate the resolved specs through [`FieldSource`], so an
//! untrusted expression can never reach the query layer.

use std::cmp::Ordering;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::common::entities::app_errors::CoreError;

/// Column of the deal-item record itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemColumn {
    Id,
    DealId,
    MaterialId,
    PricePerOne,
    Quantity,
    Timestamp,
}

/// Column of the joined parent deal, addressed as `deal.<field>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealColumn {
    Id,
    SellerId,
    BuyerId,
    DealTime,
    Timestamp,
    DealPriceId,
    DealPaymentId,
}

/// One addressable field of the deal-item/deal join. The two enums together
/// are the complete allow-list; anything a client string names outside of
/// them is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Item(ItemColumn),
    Deal(DealColumn),
}

impl FromStr for Field {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(deal_field) = s.strip_prefix("deal.") {
            return match deal_field {
                "id" => Ok(Field::Deal(DealColumn::Id)),
                "sellerId" => Ok(Field::Deal(DealColumn::SellerId)),
                "buyerId" => Ok(Field::Deal(DealColumn::BuyerId)),
                "dealTime" => Ok(Field::Deal(DealColumn::DealTime)),
                "timestamp" => Ok(Field::Deal(DealColumn::Timestamp)),
                "dealPriceId" => Ok(Field::Deal(DealColumn::DealPriceId)),
                "dealPaymentId" => Ok(Field::Deal(DealColumn::DealPaymentId)),
                _ => Err(()),
            };
        }
        match s {
            "id" => Ok(Field::Item(ItemColumn::Id)),
            "dealId" => Ok(Field::Item(ItemColumn::DealId)),
            "materialId" => Ok(Field::Item(ItemColumn::MaterialId)),
            "pricePerOne" => Ok(Field::Item(ItemColumn::PricePerOne)),
            "quantity" => Ok(Field::Item(ItemColumn::Quantity)),
            "timestamp" => Ok(Field::Item(ItemColumn::Timestamp)),
            _ => Err(()),
        }
    }
}

/// How a field's values compare, which bounds the operators a filter clause
/// on it may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Identifier reference; equality only.
    Reference,
    /// Decimal amount; full range comparisons.
    Numeric,
    /// Point in time; full range comparisons.
    Time,
}

impl Field {
    pub fn kind(self) -> FieldKind {
        match self {
            Field::Item(ItemColumn::PricePerOne) | Field::Item(ItemColumn::Quantity) => {
                FieldKind::Numeric
            }
            Field::Item(ItemColumn::Timestamp)
            | Field::Deal(DealColumn::DealTime)
            | Field::Deal(DealColumn::Timestamp) => FieldKind::Time,
            _ => FieldKind::Reference,
        }
    }

    /// Parses a raw filter value against the field's declared type.
    pub fn parse_value(self, raw: &str) -> Result<FieldValue, ()> {
        match self.kind() {
            FieldKind::Reference => raw.parse::<i64>().map(FieldValue::Int).map_err(|_| ()),
            FieldKind::Numeric => raw
                .parse::<Decimal>()
                .map(FieldValue::Decimal)
                .map_err(|_| ()),
            FieldKind::Time => DateTime::parse_from_rfc3339(raw)
                .map(|t| FieldValue::Time(t.with_timezone(&Utc)))
                .map_err(|_| ()),
        }
    }
}

/// A single typed field value, as produced by [`FieldSource`] accessors and
/// filter-value parsing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Int(i64),
    Decimal(Decimal),
    Time(DateTime<Utc>),
}

impl FieldValue {
    /// Variants only compare to themselves; accessors are total per field,
    /// so mixed variants never occur for the same field.
    pub fn compare(self, other: FieldValue) -> Option<Ordering> {
        match (self, other) {
            (FieldValue::Int(a), FieldValue::Int(b)) => Some(a.cmp(&b)),
            (FieldValue::Decimal(a), FieldValue::Decimal(b)) => Some(a.cmp(&b)),
            (FieldValue::Time(a), FieldValue::Time(b)) => Some(a.cmp(&b)),
            _ => None,
        }
    }
}

/// Typed access to the allow-listed fields of a joined row. Storage adapters
/// evaluate resolved sort and filter specs through this seam.
pub trait FieldSource {
    fn field_value(&self, field: Field) -> FieldValue;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: Field,
    pub direction: SortDirection,
}

/// Resolved ordering over the deal-item/deal join. Always a total order:
/// construction appends the item id as a final ascending key unless the
/// ordering already terminates in it, so pagination over an unchanged data
/// set is stable and gap-free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub keys: Vec<SortKey>,
}

impl SortSpec {
    /// The stable default ordering: most recent deal first.
    pub fn most_recent_first() -> Self {
        Self {
            keys: vec![SortKey {
                field: Field::Deal(DealColumn::DealTime),
                direction: SortDirection::Desc,
            }],
        }
        .with_tie_break()
    }

    /// Parses a `<field> [asc|desc]` sort string. Direction defaults to
    /// ascending; an empty string resolves to [`SortSpec::most_recent_first`].
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(Self::most_recent_first());
        }

        let mut tokens = input.split_whitespace();
        let field_token = tokens.next().unwrap_or_default();
        let field = field_token.parse::<Field>().map_err(|_| {
            CoreError::InvalidSortSpec(format!("unknown field `{field_token}`"))
        })?;
        let direction = match tokens.next() {
            None => SortDirection::Asc,
            Some(token) => token.parse::<SortDirection>().map_err(|_| {
                CoreError::InvalidSortSpec(format!("unknown direction `{token}`"))
            })?,
        };
        if let Some(extra) = tokens.next() {
            return Err(CoreError::InvalidSortSpec(format!(
                "unexpected token `{extra}`"
            )));
        }

        Ok(Self {
            keys: vec![SortKey { field, direction }],
        }
        .with_tie_break())
    }

    fn with_tie_break(mut self) -> Self {
        let id = Field::Item(ItemColumn::Id);
        if self.keys.last().map(|key| key.field) != Some(id) {
            self.keys.push(SortKey {
                field: id,
                direction: SortDirection::Asc,
            });
        }
        self
    }

    /// Lexicographic comparison over the resolved keys.
    pub fn compare<T: FieldSource>(&self, a: &T, b: &T) -> Ordering {
        for key in &self.keys {
            let ordering = a
                .field_value(key.field)
                .compare(b.field_value(key.field))
                .unwrap_or(Ordering::Equal);
            let ordering = match key.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::most_recent_first()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Lt,
    Gt,
    Le,
    Ge,
}

impl CompareOp {
    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "=" => Some(CompareOp::Eq),
            "<" => Some(CompareOp::Lt),
            ">" => Some(CompareOp::Gt),
            "<=" => Some(CompareOp::Le),
            ">=" => Some(CompareOp::Ge),
            _ => None,
        }
    }

    fn allows(self, ordering: Ordering) -> bool {
        match self {
            CompareOp::Eq => ordering == Ordering::Equal,
            CompareOp::Lt => ordering == Ordering::Less,
            CompareOp::Gt => ordering == Ordering::Greater,
            CompareOp::Le => ordering != Ordering::Greater,
            CompareOp::Ge => ordering != Ordering::Less,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterClause {
    pub field: Field,
    pub op: CompareOp,
    pub value: FieldValue,
}

impl FilterClause {
    pub fn eq(field: Field, value: FieldValue) -> Self {
        Self {
            field,
            op: CompareOp::Eq,
            value,
        }
    }
}

/// Resolved predicate over the deal-item/deal join: a conjunction of typed
/// clauses. The empty spec matches every row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSpec {
    pub clauses: Vec<FilterClause>,
}

// Two-character operators must be probed before their one-character
// prefixes so `<=` is not read as `<`.
const OPERATOR_SYMBOLS: [&str; 5] = ["<=", ">=", "=", "<", ">"];

impl FilterSpec {
    /// Parses a comma-separated list of `field[ op ]value` clauses. An empty
    /// string means no filtering.
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(Self::default());
        }

        let clauses = input
            .split(',')
            .map(|raw| Self::parse_clause(raw.trim()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { clauses })
    }

    fn parse_clause(raw: &str) -> Result<FilterClause, CoreError> {
        let (at, symbol) = OPERATOR_SYMBOLS
            .iter()
            .filter_map(|symbol| raw.find(symbol).map(|at| (at, *symbol)))
            .min_by_key(|(at, _)| *at)
            .ok_or_else(|| {
                CoreError::InvalidFilterSpec(format!("missing operator in `{raw}`"))
            })?;

        let field_token = raw[..at].trim();
        let value_token = raw[at + symbol.len()..].trim();
        if field_token.is_empty() || value_token.is_empty() {
            return Err(CoreError::InvalidFilterSpec(format!(
                "incomplete clause `{raw}`"
            )));
        }

        let field = field_token.parse::<Field>().map_err(|_| {
            CoreError::InvalidFilterSpec(format!("unknown field `{field_token}`"))
        })?;
        let op = CompareOp::from_symbol(symbol).ok_or_else(|| {
            CoreError::InvalidFilterSpec(format!("unknown operator `{symbol}`"))
        })?;
        if field.kind() == FieldKind::Reference && op != CompareOp::Eq {
            return Err(CoreError::InvalidFilterSpec(format!(
                "field `{field_token}` only supports `=`"
            )));
        }
        let value = field.parse_value(value_token).map_err(|_| {
            CoreError::InvalidFilterSpec(format!(
                "bad value `{value_token}` for field `{field_token}`"
            ))
        })?;

        Ok(FilterClause { field, op, value })
    }

    pub fn and(mut self, clause: FilterClause) -> Self {
        self.clauses.push(clause);
        self
    }

    pub fn matches<T: FieldSource>(&self, row: &T) -> bool {
        self.clauses.iter().all(|clause| {
            row.field_value(clause.field)
                .compare(clause.value)
                .is_some_and(|ordering| clause.op.allows(ordering))
        })
    }
}
