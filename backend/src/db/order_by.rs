//! Ordering directive for race listings.
//!
//! Clients send a free-text directive shaped `"field"` or `"field direction"`.
//! It is parsed into an [OrderBy] before any query runs; the column written to
//! SQL always comes from [OrderField::column], never from the raw input.

use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

/// Request field every ordering error is attributed to.
pub const ORDER_BY_FIELD: &str = "orderBy";

/// Columns a race listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderField {
    Id,
    MeetingId,
    Name,
    Number,
    Visible,
    AdvertisedStartTime,
}

impl OrderField {
    pub const ALL: [OrderField; 6] = [
        OrderField::Id,
        OrderField::MeetingId,
        OrderField::Name,
        OrderField::Number,
        OrderField::Visible,
        OrderField::AdvertisedStartTime,
    ];

    pub fn column(self) -> &'static str {
        match self {
            OrderField::Id => "id",
            OrderField::MeetingId => "meeting_id",
            OrderField::Name => "name",
            OrderField::Number => "number",
            OrderField::Visible => "visible",
            OrderField::AdvertisedStartTime => "advertised_start_time",
        }
    }
}

impl FromStr for OrderField {
    type Err = CatalogError;

    /// Case-insensitive match against the column names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderField::ALL
            .into_iter()
            .find(|field| field.column().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                CatalogError::invalid_argument(
                    ORDER_BY_FIELD,
                    format!(
                        "orderBy field is invalid, must be either {}.",
                        allowed_fields()
                    ),
                )
            })
    }
}

/// Sort direction for ORDER BY clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl OrderDirection {
    /// Convert to SQL order string
    pub fn to_sql(&self) -> &'static str {
        match self {
            OrderDirection::Asc => "ASC",
            OrderDirection::Desc => "DESC",
        }
    }
}

impl FromStr for OrderDirection {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("ASC") {
            Ok(OrderDirection::Asc)
        } else if s.eq_ignore_ascii_case("DESC") {
            Ok(OrderDirection::Desc)
        } else {
            Err(CatalogError::invalid_argument(
                ORDER_BY_FIELD,
                "orderBy direction invalid, must be either \"ASC\" or \"DESC\".",
            ))
        }
    }
}

/// A validated ordering: one field and an optional direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    pub field: OrderField,
    pub direction: Option<OrderDirection>,
}

impl OrderBy {
    /// Parse a raw directive. An empty directive means "store order" and
    /// yields `None`.
    ///
    /// The directive is split on single spaces and must produce one or two
    /// tokens. An empty direction token (`"id "`) counts as no direction.
    pub fn parse(raw: &str) -> Result<Option<Self>, CatalogError> {
        if raw.is_empty() {
            return Ok(None);
        }

        let tokens: Vec<&str> = raw.split(' ').collect();
        let (field, direction) = match tokens.as_slice() {
            [field] => (*field, ""),
            [field, direction] => (*field, *direction),
            _ => {
                return Err(CatalogError::invalid_argument(
                    ORDER_BY_FIELD,
                    "orderBy is invalid, must be in the format \"field [ASC|DESC]\".",
                ));
            }
        };

        if field.is_empty() {
            return Err(CatalogError::invalid_argument(
                ORDER_BY_FIELD,
                "orderBy field is required.",
            ));
        }

        let field = field.parse::<OrderField>()?;
        let direction = if direction.is_empty() {
            None
        } else {
            Some(direction.parse::<OrderDirection>()?)
        };

        Ok(Some(Self { field, direction }))
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field.column())?;
        if let Some(direction) = self.direction {
            write!(f, " {}", direction.to_sql())?;
        }
        Ok(())
    }
}

/// Append an ORDER BY clause for `order_by` to `query`.
///
/// An empty directive leaves the query untouched.
pub fn apply_order_by(query: String, order_by: &str) -> Result<String, CatalogError> {
    match OrderBy::parse(order_by)? {
        Some(order) => Ok(format!("{query} ORDER BY {order}")),
        None => Ok(query),
    }
}

/// `"id", "meeting_id", ... or "advertised_start_time"`
fn allowed_fields() -> String {
    let quoted: Vec<String> = OrderField::ALL
        .iter()
        .map(|field| format!("\"{}\"", field.column()))
        .collect();

    match quoted.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} or {}", rest.join(", "), last),
        _ => quoted.join(""),
    }
}
