use crate::{
    model::flash::{Flash, FlashLevel},
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::AuthGuard,
            session::{AuthSession, CsrfSession, FlashSession},
        },
    },
};
use test_utils::{builder::TestBuilder, factory};
