// Module exports for pure logic
pub mod tags_view;   // Visited / cached / iframe collections
pub mod tabs;        // Tab reordering logic
pub mod commands;    // IPC-shaped command layer
