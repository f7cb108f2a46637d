// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the interactive flow.
//
// Module responsibilities:
// - `creds`: Loads credentials from an encrypted file pair, falling back
//   to interactive capture, and persists them for future runs.
// - `api`: Encapsulates the HTTP interaction with the GitHub API
//   (listing the authenticated user's repositories).
// - `ui`: Renders the numbered repository menu and reads the selection.
// - `git`: Rewrites the clone URL with embedded credentials and shells
//   out to `git clone`.
//
// Keeping this separation makes the non-interactive pieces (URL
// rewriting, JSON parsing, menu validation, the crypto round-trip)
// testable without a terminal or network.
pub mod api;
pub mod creds;
pub mod git;
pub mod ui;
