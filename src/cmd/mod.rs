/// Generic document decode command.
pub mod decode;
/// Key path lookup command.
pub mod get;
/// Value tree summary command.
pub mod info;
/// Shared value printing helpers.
pub mod print;
