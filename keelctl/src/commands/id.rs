//! Identifier generation command

use crate::config::KeelctlConfig;
use crate::output;
use keel_core::errors::CoreError;
use keel_core::ComponentBase;
use tracing::{debug, info};

/// Handle the `id` command
pub fn handle_id_command(count: usize, config: &KeelctlConfig) -> Result<(), CoreError> {
    let base = config.build_component();
    info!("Generating {} id(s) with strategy {}", count, config.id_strategy);

    let ids = generate_ids(&base, count);
    output::display_ids(&ids);
    Ok(())
}

/// Draw `count` identifiers from the component
pub fn generate_ids(base: &ComponentBase, count: usize) -> Vec<String> {
    debug!("Drawing ids from {:?}", base);
    (0..count).map(|_| base.generate_id()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IdStrategy;

    #[test]
    fn test_generate_ids_sequential() {
        let config = KeelctlConfig {
            id_strategy: IdStrategy::Sequential { prefix: "run".to_string() },
            ..Default::default()
        };
        let ids = generate_ids(&config.build_component(), 3);
        assert_eq!(ids, vec!["run-1", "run-2", "run-3"]);
    }

    #[test]
    fn test_generate_ids_uuid_are_unique() {
        let ids = generate_ids(&KeelctlConfig::default().build_component(), 10);
        let unique: std::collections::HashSet<&String> = ids.iter().collect();
        assert_eq!(unique.len(), 10);
    }

    #[test]
    fn test_zero_count() {
        assert!(generate_ids(&ComponentBase::default(), 0).is_empty());
    }
}
