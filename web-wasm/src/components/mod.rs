//! Componentes de interface

pub mod form;
pub mod forms;
pub mod item;
pub mod list_view;
pub mod modal;
pub mod page_header;
pub mod sidebar;
pub mod toasts;
pub mod workstations_filter;
