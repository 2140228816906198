pub mod anointment_list;
pub mod import_panel;
pub mod monster_picker;
pub mod notice_banner;
pub mod party_grid;
pub mod share_link;
pub mod specialization_select;
