//! Query root and its resolvers

use async_graphql::{Context, Object};

use crate::schema::types::PokemonOrderByName;
use crate::store::{FindManyArgs, Pokemon, PokemonStore, DEFAULT_CURSOR, DEFAULT_SKIP, DEFAULT_TAKE};

#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// List Pokemon starting at `cursor`, ordered by name
    ///
    /// Defaults: cursor 1, take 10, skip 0, orderBy { name: asc }.
    async fn get_all_pokemons(
        &self,
        ctx: &Context<'_>,
        cursor: Option<i32>,
        take: Option<i32>,
        skip: Option<i32>,
        order_by: Option<PokemonOrderByName>,
    ) -> async_graphql::Result<Vec<Pokemon>> {
        let store = ctx.data::<PokemonStore>()?;

        let args = FindManyArgs {
            cursor: cursor.unwrap_or(DEFAULT_CURSOR),
            take: take.unwrap_or(DEFAULT_TAKE),
            skip: skip.unwrap_or(DEFAULT_SKIP),
            order: order_by.unwrap_or_default().name,
        };

        Ok(store.find_many(&args).await?)
    }
}
