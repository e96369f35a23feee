pub mod form_fields;
pub mod form_panel;
pub mod resource_list;
pub mod section_header;
pub mod tab_bar;
