use crate::{data::team::TeamRepository, model::tournament::CreateTeamParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
