pub mod tag_session;
