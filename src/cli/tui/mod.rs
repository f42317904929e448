mod theme;

pub use theme::{
    miniapp_theme, print_banner, print_error, print_plan, print_success, print_summary,
};
