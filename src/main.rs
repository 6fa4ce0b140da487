use dotenvy::dotenv;
use schoolbook::config;
use schoolbook::entities::Batch;
use schoolbook::errors::{Error, Result};
use schoolbook::store::RecordStore;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Make it non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Load the main application configuration
    let app_config = config::load_app_configuration()?;
    info!("Successfully processed application configuration.");

    // 4. Open the record store (a missing backing file means a fresh store)
    let mut store = RecordStore::open(&app_config.data_path)?;

    // 5. Seed the configured batches; ones that already exist are left alone
    for name in &app_config.batches {
        match store.add_batch(Batch::new(name.as_str())) {
            Ok(()) => info!("Seeded batch '{}'", name),
            Err(Error::DuplicateBatch { .. }) => {}
            Err(e) => {
                warn!("Failed to seed batch '{}': {}", name, e);
                return Err(e);
            }
        }
    }
    store.save()?;

    // 6. Dashboard summary for whoever started the process
    info!(
        "Teachers: {} approved, {} pending (salary total: {})",
        store.get_teacher_count(Some(true)),
        store.get_teacher_count(Some(false)),
        store.get_total_salary(true)
    );
    info!(
        "Students: {} approved, {} pending (fee total: {})",
        store.get_student_count(Some(true)),
        store.get_student_count(Some(false)),
        store.get_total_fees(true)
    );

    Ok(())
}
