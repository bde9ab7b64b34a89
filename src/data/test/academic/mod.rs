use crate::data::academic::AcademicRepository;
use entity::prelude::Academic;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
