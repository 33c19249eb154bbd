use anyhow::{anyhow, Result};
use std::env;
use std::io;
use weather_birthday_bot::config::DatabaseConfig;
use weather_birthday_bot::database::connection::DatabaseManager;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize basic logging for the migration
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("migrate");

    match command {
        "migrate" | "up" => run_migrations().await,
        "check" => check_database().await,
        "reset" => reset_database().await,
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            print_help();
            std::process::exit(1);
        }
    }
}

async fn connect() -> Result<DatabaseManager> {
    dotenvy::dotenv().ok();
    let config = DatabaseConfig::from_env()?;

    println!("📊 Database: {}", config.display_target());

    DatabaseManager::new(&config)
        .await
        .map_err(|e| anyhow!("Failed to connect to database: {}", e))
}

async fn run_migrations() -> Result<()> {
    println!("🔧 Weather & Birthday Bot - Database Migration Tool");
    println!("===================================================");

    let db_manager = connect().await?;

    println!("🚀 Running database migrations...");

    match db_manager.run_migrations().await {
        Ok(_) => {
            println!("✅ Migrations completed successfully!");
        }
        Err(e) => {
            eprintln!("❌ Migration failed: {e}");
            std::process::exit(1);
        }
    }

    Ok(())
}

async fn check_database() -> Result<()> {
    println!("🔍 Checking database connection and schema...");

    let db_manager = connect().await?;

    match check_tables(&db_manager).await {
        Ok(tables) if tables.iter().any(|t| t == "birthdays") => {
            println!("✅ Database connection successful!");
            println!("📋 Found tables:");
            for table in tables {
                println!("  • {table}");
            }
        }
        Ok(_) => {
            println!("⚠️  Connected, but the birthdays table is missing");
            println!("💡 Try running 'migrate up' to create the schema");
        }
        Err(e) => {
            println!("⚠️  Database check failed: {e}");
            println!("💡 Try running 'migrate up' to create the schema");
        }
    }

    Ok(())
}

async fn reset_database() -> Result<()> {
    println!("⚠️  WARNING: This will delete ALL registered birthdays!");
    println!("🤔 Are you sure you want to continue? (yes/no)");

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    if input.trim().to_lowercase() != "yes" {
        println!("❌ Reset cancelled.");
        return Ok(());
    }

    let db_manager = connect().await?;

    sqlx::query("DROP TABLE IF EXISTS birthdays")
        .execute(&db_manager.pool)
        .await?;
    sqlx::query("DROP TABLE IF EXISTS _sqlx_migrations")
        .execute(&db_manager.pool)
        .await?;
    println!("🗑️  Dropped birthdays table and migration history");

    println!("🔄 Recreating database schema...");
    db_manager.run_migrations().await?;

    println!("✅ Database reset completed!");

    Ok(())
}

async fn check_tables(db_manager: &DatabaseManager) -> Result<Vec<String>> {
    let tables = sqlx::query_scalar::<_, String>(
        "SELECT table_name::text FROM information_schema.tables WHERE table_schema = 'public' ORDER BY table_name",
    )
    .fetch_all(&db_manager.pool)
    .await?;

    Ok(tables)
}

fn print_help() {
    println!("🎂 Weather & Birthday Bot - Database Migration Tool");
    println!();
    println!("USAGE:");
    println!("    migrate [COMMAND]");
    println!();
    println!("COMMANDS:");
    println!("    migrate, up    Run database migrations (default)");
    println!("    check          Check database connection and schema");
    println!("    reset          Drop and recreate the schema - DESTRUCTIVE!");
    println!("    help           Show this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("    DATABASE       Database name");
    println!("    DATABASE_USER  Database user (default: postgres)");
    println!("    PASSWORD       Database password");
    println!("    HOST           Database host");
    println!("    PORT           Database port");
    println!();
    println!("EXAMPLES:");
    println!("    migrate                    # Run migrations");
    println!("    migrate check              # Check database status");
    println!("    migrate reset              # Reset database (careful!)");
    println!();
}
