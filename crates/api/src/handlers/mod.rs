pub mod actors;
pub mod auth;
pub mod countries;
pub mod directors;
pub mod favorites;
pub mod genres;
pub mod history;
pub mod moments;
pub mod movie_languages;
pub mod movies;
pub mod ratings;
pub mod users;
