use crate::books::factory::create_book_repository;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::Library;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;
use crate::members::factory::create_member_repository;

pub fn create_catalog_service(config: &Configuration) -> Box<dyn CatalogService> {
    Box::new(Library::new(config, create_book_repository(),
                          create_member_repository(), create_publisher(config.publisher)))
}
