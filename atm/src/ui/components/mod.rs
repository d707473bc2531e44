pub mod amount_form;
pub mod empty_state;
pub mod help_bar;
pub mod help_popup;
pub mod mode_selector;
pub mod popup;
