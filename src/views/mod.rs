//! Built-in views

pub mod show_home;

use crate::component::ComponentError;
use crate::registry::Registry;

/// Register every built-in view
pub fn register_builtin(registry: &mut Registry) -> Result<(), ComponentError> {
    registry.register(show_home::definition()?)?;
    Ok(())
}
