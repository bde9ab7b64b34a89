use crate::data::subject::SubjectRepository;
use entity::prelude::Subject;
use sea_orm::{DbErr, EntityTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod update;
