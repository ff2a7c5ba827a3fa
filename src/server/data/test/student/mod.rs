use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::student::StudentFactory};

use crate::server::{
    data::student::StudentRepository,
    model::student::{CreateStudentParams, StudentFilter},
};

mod missing_ids;
