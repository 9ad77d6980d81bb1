use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, require_present};
use crate::core::library::LibraryResult;
use crate::members::dto::MemberDto;

pub struct RemoveMemberCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> RemoveMemberCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveMemberCommandRequest {
    member_id: String,
}

impl RemoveMemberCommandRequest {
    pub fn new(member_id: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RemoveMemberCommandResponse {
    pub member: MemberDto,
}

impl RemoveMemberCommandResponse {
    pub fn new(member: MemberDto) -> Self {
        Self {
            member,
        }
    }
}

impl Command<RemoveMemberCommandRequest, RemoveMemberCommandResponse> for RemoveMemberCommand<'_> {
    fn execute(&mut self, req: RemoveMemberCommandRequest) -> LibraryResult<RemoveMemberCommandResponse> {
        let member_id = require_present("Member ID", &req.member_id)?;
        self.catalog_service.remove_member(member_id.as_str()).map(RemoveMemberCommandResponse::new)
    }
}
