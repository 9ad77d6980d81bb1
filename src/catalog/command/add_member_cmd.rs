use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, require_present};
use crate::core::library::LibraryResult;
use crate::members::dto::MemberDto;

pub struct AddMemberCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> AddMemberCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddMemberCommandRequest {
    name: String,
    member_id: String,
}

impl AddMemberCommandRequest {
    pub fn new(name: &str, member_id: &str) -> Self {
        Self {
            name: name.to_string(),
            member_id: member_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddMemberCommandResponse {
    pub member: MemberDto,
}

impl AddMemberCommandResponse {
    pub fn new(member: MemberDto) -> Self {
        Self {
            member,
        }
    }
}

impl Command<AddMemberCommandRequest, AddMemberCommandResponse> for AddMemberCommand<'_> {
    fn execute(&mut self, req: AddMemberCommandRequest) -> LibraryResult<AddMemberCommandResponse> {
        let name = require_present("Member name", &req.name)?;
        let member_id = require_present("Member ID", &req.member_id)?;
        self.catalog_service.add_member(&MemberDto::new(name.as_str(), member_id.as_str()))
            .map(AddMemberCommandResponse::new)
    }
}
