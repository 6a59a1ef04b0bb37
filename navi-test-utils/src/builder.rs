//! Declarative test builder.
//!
//! The builder queues tables, fixtures and seed source files; everything is executed in the
//! final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables, player
/// fixtures and CSV seed sources. Methods can be chained together and finalized with
/// `build()` to create a complete test context.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_ledger_tables: bool,

    // Player names to insert, in order
    players: Vec<String>,
    // (file name, contents) written into the seed directory
    seed_files: Vec<(String, String)>,
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables, fixtures, or seed files configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_ledger_tables: false,
            players: Vec::new(),
            seed_files: Vec::new(),
        }
    }

    /// Add every table of the season ledger to the test database.
    ///
    /// Creates Player, Game, MatchAttendance, MatchGoalAssist, SeasonStats and UpcomingMatch.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_ledger_tables(mut self) -> Self {
        self.include_ledger_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```no_run
    /// use navi_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), navi_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Player)
    ///     .with_table(SeasonStats)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a player into the database.
    ///
    /// Players are inserted in the order they are queued, so the first queued player receives
    /// ID 1, the second ID 2 and so on.
    ///
    /// # Arguments
    /// - `name` - Player name
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_player(mut self, name: impl Into<String>) -> Self {
        self.players.push(name.into());
        self
    }

    /// Write a file into the seed source directory.
    ///
    /// # Arguments
    /// - `file_name` - File name relative to the seed directory (e.g. `response.csv`)
    /// - `contents` - Raw file contents
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_seed_file(
        mut self,
        file_name: impl Into<String>,
        contents: impl Into<String>,
    ) -> Self {
        self.seed_files.push((file_name.into(), contents.into()));
        self
    }

    /// Build the test context by creating all configured tables, fixtures and seed files.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (ledger tables if specified, then custom tables)
    /// 2. Inserts player fixtures
    /// 3. Writes seed source files
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    /// - `Err(TestError::IoError)` - Seed directory could not be written
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_ledger_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Player),
                schema.create_table_from_entity(entity::prelude::Game),
                schema.create_table_from_entity(entity::prelude::MatchAttendance),
                schema.create_table_from_entity(entity::prelude::MatchGoalAssist),
                schema.create_table_from_entity(entity::prelude::SeasonStats),
                schema.create_table_from_entity(entity::prelude::UpcomingMatch),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for name in self.players {
            setup.player().insert_player(&name).await?;
        }

        // 3. Write seed sources
        for (file_name, contents) in self.seed_files {
            std::fs::write(setup.seed_dir().join(file_name), contents)?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
