//! Formulários por entidade

pub mod categoria_form;
pub mod chamado_form;
pub mod city_form;
pub mod login_form;
pub mod user_form;
pub mod workstation_form;

pub use categoria_form::CategoriaForm;
pub use chamado_form::{ChamadoForm, ChamadoFormOptions};
pub use city_form::CityForm;
pub use login_form::LoginForm;
pub use user_form::UserForm;
pub use workstation_form::WorkstationForm;
