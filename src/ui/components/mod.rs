pub mod category_list;
pub mod detail_panel;
pub mod footer;
pub mod script_panel;
pub mod steps;
pub mod system_picker;
