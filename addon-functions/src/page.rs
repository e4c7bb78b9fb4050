//! Fixed assets of the platform's client SDK.
//!
//! Every page rendered into the add-on window links the SDK stylesheet and script, then
//! calls `SMClient.init()` to get a `client` for resizing or closing the window.

/// Stylesheet giving add-on pages the platform's look.
pub const SDK_STYLESHEET_URL: &str = "https://platform.servicem8.com/sdk/1.0/sdk.css";

/// Client SDK script providing `SMClient`.
pub const SDK_SCRIPT_URL: &str = "https://platform.servicem8.com/sdk/1.0/sdk.js";
