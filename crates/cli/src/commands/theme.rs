//! Colour-mode preference.

use backoffice_admin::services::ColorModePreference;
use backoffice_core::ColorMode;

use super::Context;

fn preference(ctx: &Context) -> ColorModePreference {
    ColorModePreference::new(ctx.backend.storage().clone(), ctx.system_theme)
}

/// Print the mode in effect and where it comes from.
#[allow(clippy::print_stdout)]
pub fn show(ctx: &Context) {
    let pref = preference(ctx);
    let source = if pref.stored().is_some() {
        "chosen"
    } else {
        "system"
    };
    println!("{} ({source})", pref.mode());
}

/// Store an explicit choice.
#[allow(clippy::print_stdout)]
pub fn set(ctx: &Context, mode: ColorMode) {
    preference(ctx).set(mode);
    println!("{mode}");
}

/// Flip the mode and store it.
#[allow(clippy::print_stdout)]
pub fn toggle(ctx: &Context) {
    println!("{}", preference(ctx).toggle());
}
