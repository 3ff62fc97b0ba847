mod admin_login;
mod admin_panel;
mod chat_widget;
mod contact;
mod gallery_grid;
mod service_menu;
pub mod toast;

pub use admin_login::AdminLogin;
pub use admin_panel::AdminPanel;
pub use chat_widget::ChatWidget;
pub use contact::ContactSection;
pub use gallery_grid::GalleryGrid;
pub use service_menu::ServiceMenu;
pub use toast::ToastStack;
