use crate::data::request::RequestRepository;
use entity::prelude::Request;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod list;
mod update;
