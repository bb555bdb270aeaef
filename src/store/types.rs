use async_graphql::{Enum, SimpleObject};

/// A stored Pokemon row
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, SimpleObject)]
pub struct Pokemon {
    pub id: i32,
    pub name: String,
    pub hp: i32,
    pub attack: i32,
}

/// Insert payload; the id is assigned by storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewPokemon<'a> {
    pub name: &'a str,
    pub hp: i32,
    pub attack: i32,
}

/// Sort direction, exposed to GraphQL as `asc` / `desc`
#[derive(Enum, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[graphql(rename_items = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn reversed(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub(crate) fn keyword(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    /// Comparison that keeps rows at or after the cursor in this direction
    pub(crate) fn comparison(self) -> &'static str {
        match self {
            SortOrder::Asc => ">",
            SortOrder::Desc => "<",
        }
    }
}

/// Arguments for [`PokemonStore::find_many`](super::PokemonStore::find_many)
///
/// The window starts at the row whose id is `cursor` (inclusive), drops `skip`
/// rows, and returns up to `|take|` rows ordered by name then id. A negative
/// `take` walks backwards from the cursor; rows still come back in `order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindManyArgs {
    pub cursor: i32,
    pub take: i32,
    pub skip: i32,
    pub order: SortOrder,
}

pub const DEFAULT_CURSOR: i32 = 1;
pub const DEFAULT_TAKE: i32 = 10;
pub const DEFAULT_SKIP: i32 = 0;

impl Default for FindManyArgs {
    fn default() -> Self {
        Self {
            cursor: DEFAULT_CURSOR,
            take: DEFAULT_TAKE,
            skip: DEFAULT_SKIP,
            order: SortOrder::Asc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_many_defaults() {
        let args = FindManyArgs::default();
        assert_eq!(args.cursor, 1);
        assert_eq!(args.take, 10);
        assert_eq!(args.skip, 0);
        assert_eq!(args.order, SortOrder::Asc);
    }

    #[test]
    fn test_sort_order_reversed() {
        assert_eq!(SortOrder::Asc.reversed(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.reversed(), SortOrder::Asc);
    }

    #[test]
    fn test_sort_order_sql_fragments() {
        assert_eq!(SortOrder::Asc.keyword(), "ASC");
        assert_eq!(SortOrder::Desc.comparison(), "<");
    }
}
