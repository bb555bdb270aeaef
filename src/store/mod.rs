//! SQLite-backed Pokemon storage
//!
//! `PokemonStore` owns the connection pool and carries the cursor pagination
//! rules used by the `getAllPokemons` query.

mod types;

pub use types::{
    FindManyArgs, NewPokemon, Pokemon, SortOrder, DEFAULT_CURSOR, DEFAULT_SKIP, DEFAULT_TAKE,
};

use crate::config::DatabaseConfig;
use crate::error::{PokedexError, Result};

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

#[derive(Clone)]
pub struct PokemonStore {
    pool: SqlitePool,
}

impl PokemonStore {
    /// Open a pool for the configured database, creating the file if missing
    ///
    /// Every connection to `sqlite::memory:` is its own database, so use
    /// `max_connections = 1` with in-memory URLs.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        tracing::info!("Connected to database at {}", config.url);

        Ok(Self { pool })
    }

    /// Apply embedded migrations
    pub async fn migrate(&self) -> Result<()> {
        MIGRATOR.run(&self.pool).await?;
        Ok(())
    }

    /// Insert one row and return it with its assigned id
    pub async fn create(&self, pokemon: &NewPokemon<'_>) -> Result<Pokemon> {
        let created: Pokemon = sqlx::query_as(
            r#"
            INSERT INTO pokemon (name, hp, attack)
            VALUES (?, ?, ?)
            RETURNING id, name, hp, attack
            "#,
        )
        .bind(pokemon.name)
        .bind(pokemon.hp)
        .bind(pokemon.attack)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Cursor-paginated listing ordered by name, ties broken by id
    ///
    /// An unknown cursor yields an empty list. A negative `skip` is rejected.
    pub async fn find_many(&self, args: &FindManyArgs) -> Result<Vec<Pokemon>> {
        if args.skip < 0 {
            return Err(PokedexError::InvalidArgument(format!(
                "skip must not be negative, got {}",
                args.skip
            )));
        }

        if args.take == 0 {
            return Ok(Vec::new());
        }

        let backwards = args.take < 0;
        let direction = if backwards {
            args.order.reversed()
        } else {
            args.order
        };
        let limit = i64::from(args.take).abs();

        // The cursor row is joined in; when it does not exist the join is empty.
        let sql = format!(
            r#"
            SELECT p.id AS id, p.name AS name, p.hp AS hp, p.attack AS attack
            FROM pokemon AS p,
                 (SELECT id, name FROM pokemon WHERE id = ?) AS c
            WHERE p.name {cmp} c.name
               OR (p.name = c.name AND p.id {cmp}= c.id)
            ORDER BY p.name {dir}, p.id {dir}
            LIMIT ? OFFSET ?
            "#,
            cmp = direction.comparison(),
            dir = direction.keyword(),
        );

        tracing::debug!(
            cursor = args.cursor,
            take = args.take,
            skip = args.skip,
            order = ?args.order,
            "Executing find_many"
        );

        let mut rows: Vec<Pokemon> = sqlx::query_as(&sql)
            .bind(args.cursor)
            .bind(limit)
            .bind(i64::from(args.skip))
            .fetch_all(&self.pool)
            .await?;

        if backwards {
            rows.reverse();
        }

        Ok(rows)
    }

    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pokemon")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Close the pool and wait for open connections to finish
    pub async fn disconnect(&self) {
        self.pool.close().await;
        tracing::debug!("Database connection pool closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::POKEMON_SEED;
    use tempfile::TempDir;

    async fn open_store() -> (TempDir, PokemonStore) {
        let dir = TempDir::new().unwrap();
        let config = DatabaseConfig {
            url: format!("sqlite://{}", dir.path().join("pokedex.db").display()),
            max_connections: 2,
        };

        let store = PokemonStore::connect(&config).await.unwrap();
        store.migrate().await.unwrap();
        (dir, store)
    }

    async fn seeded_store() -> (TempDir, PokemonStore) {
        let (dir, store) = open_store().await;
        for pokemon in &POKEMON_SEED {
            store.create(pokemon).await.unwrap();
        }
        (dir, store)
    }

    fn names(rows: &[Pokemon]) -> Vec<&str> {
        rows.iter().map(|p| p.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let (_dir, store) = open_store().await;

        let first = store
            .create(&NewPokemon { name: "Pichu", hp: 20, attack: 5 })
            .await
            .unwrap();
        let second = store
            .create(&NewPokemon { name: "Pichu", hp: 20, attack: 5 })
            .await
            .unwrap();

        assert!(first.id > 0);
        assert!(second.id > first.id);
        assert_eq!(second.name, "Pichu");
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_find_many_defaults_start_at_first_id() {
        let (_dir, store) = seeded_store().await;

        let rows = store.find_many(&FindManyArgs::default()).await.unwrap();

        // Chansey sorts before Cleffa (id 1) and falls outside the window
        assert_eq!(
            names(&rows),
            vec!["Cleffa", "Feraligatr", "Gengar Prime", "Sneasel", "Venusaur"]
        );
    }

    #[tokio::test]
    async fn test_find_many_desc_with_skip() {
        let (_dir, store) = seeded_store().await;

        let args = FindManyArgs {
            cursor: 6,
            take: 2,
            skip: 1,
            order: SortOrder::Desc,
        };
        let rows = store.find_many(&args).await.unwrap();

        assert_eq!(names(&rows), vec!["Sneasel", "Gengar Prime"]);
    }

    #[tokio::test]
    async fn test_find_many_negative_take_walks_backwards() {
        let (_dir, store) = seeded_store().await;

        let args = FindManyArgs {
            cursor: 4,
            take: -2,
            ..FindManyArgs::default()
        };
        let rows = store.find_many(&args).await.unwrap();

        assert_eq!(names(&rows), vec!["Gengar Prime", "Sneasel"]);
    }

    #[tokio::test]
    async fn test_find_many_unknown_cursor_is_empty() {
        let (_dir, store) = seeded_store().await;

        let args = FindManyArgs {
            cursor: 999,
            ..FindManyArgs::default()
        };

        assert!(store.find_many(&args).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_many_zero_take_is_empty() {
        let (_dir, store) = seeded_store().await;

        let args = FindManyArgs {
            take: 0,
            ..FindManyArgs::default()
        };

        assert!(store.find_many(&args).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_many_rejects_negative_skip() {
        let (_dir, store) = seeded_store().await;

        let args = FindManyArgs {
            skip: -1,
            ..FindManyArgs::default()
        };

        let result = store.find_many(&args).await;
        assert!(matches!(result, Err(PokedexError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn test_find_many_breaks_name_ties_by_id() {
        let (_dir, store) = open_store().await;
        for _ in 0..3 {
            store
                .create(&NewPokemon { name: "Ditto", hp: 48, attack: 48 })
                .await
                .unwrap();
        }

        let args = FindManyArgs {
            cursor: 2,
            ..FindManyArgs::default()
        };
        let ids: Vec<i32> = store
            .find_many(&args)
            .await
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();

        assert_eq!(ids, vec![2, 3]);
    }

    #[tokio::test]
    async fn test_migrate_is_idempotent() {
        let (_dir, store) = open_store().await;
        store.migrate().await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_disconnect_closes_pool() {
        let (_dir, store) = open_store().await;
        store.disconnect().await;

        assert!(store.count().await.is_err());
    }
}
