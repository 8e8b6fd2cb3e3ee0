pub mod app;
pub mod boss_view;
pub mod feedback_overlay;
pub mod fill_view;
pub mod flash_view;
pub mod home_view;
pub mod hooks;
pub mod map_view;
pub mod match_view;
pub mod quiz_view;
pub mod result_overlay;
pub mod settings_modal;
pub mod wallet_panel;
