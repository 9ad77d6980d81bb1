use serde::Serialize;
use crate::catalog::domain::CatalogService;
use crate::catalog::dto::MemberLoansDto;
use crate::core::command::Command;
use crate::core::library::LibraryResult;

pub struct ListMembersCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> ListMembersCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct ListMembersCommandRequest {}

impl ListMembersCommandRequest {
    pub fn new() -> Self {
        Self {}
    }
}

#[derive(Debug, Serialize)]
pub struct ListMembersCommandResponse {
    pub members: Vec<MemberLoansDto>,
}

impl ListMembersCommandResponse {
    pub fn new(members: Vec<MemberLoansDto>) -> Self {
        Self {
            members,
        }
    }
}

impl Command<ListMembersCommandRequest, ListMembersCommandResponse> for ListMembersCommand<'_> {
    fn execute(&mut self, _req: ListMembersCommandRequest) -> LibraryResult<ListMembersCommandResponse> {
        self.catalog_service.list_all_members().map(ListMembersCommandResponse::new)
    }
}
