//! CrudService: typed CRUD over the document store.

mod crud;
pub use crud::CrudService;
