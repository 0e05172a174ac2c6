pub mod host;
pub mod ops_emit;
pub mod ops_eslint;
pub mod ops_modules;
pub mod ops_node;
pub mod ops_pkg;
pub mod ops_resolve;
pub mod ops_run;
