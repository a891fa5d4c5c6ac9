//! Build tool availability checking.

use super::Toolchain;

/// Build-file generator.
pub const CMAKE: &str = "cmake";

/// Build executor driven by CMake's Ninja generator.
pub const NINJA: &str = "ninja";

/// Tools the source build needs, in the order they are checked.
pub const REQUIRED_TOOLS: [&str; 2] = [CMAKE, NINJA];

/// First required tool missing from the command search path.
pub fn first_missing_tool<T: Toolchain + ?Sized>(toolchain: &T) -> Option<&'static str> {
    REQUIRED_TOOLS
        .into_iter()
        .find(|tool| toolchain.find(tool).is_none())
}
