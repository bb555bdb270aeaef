use async_graphql::InputObject;

use crate::store::SortOrder;

/// Ordering argument for `getAllPokemons`
#[derive(InputObject, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PokemonOrderByName {
    pub name: SortOrder,
}

impl Default for PokemonOrderByName {
    fn default() -> Self {
        Self {
            name: SortOrder::Asc,
        }
    }
}
