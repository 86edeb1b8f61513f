//! Telas de cada recurso

pub mod categories;
pub mod chamados;
pub mod cities;
pub mod problem_types;
pub mod users;
pub mod workstations;

pub use categories::CategoriesPage;
pub use chamados::ChamadosPage;
pub use cities::CitiesPage;
pub use problem_types::ProblemTypesPage;
pub use users::UsersPage;
pub use workstations::WorkstationsPage;
