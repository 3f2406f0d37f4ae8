//! Fixture builders shared by the repository integration tests.

#![allow(dead_code)]

use marquee_db::models::country::CreateCountry;
use marquee_db::models::director::CreateDirector;
use marquee_db::models::genre::CreateGenre;
use marquee_db::models::movie::{CreateMovie, Movie};
use marquee_db::models::rating::{CreateRating, Rating};
use marquee_db::models::user::{CreateUser, User};
use marquee_db::repositories::{
    CountryRepo, DirectorRepo, GenreRepo, MovieRepo, RatingRepo, UserRepo,
};
use sqlx::PgPool;

pub fn new_user(username: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        first_name: None,
        last_name: None,
        age: None,
        phone_number: None,
        role: None,
    }
}

pub async fn seed_user(pool: &PgPool, username: &str) -> User {
    UserRepo::create(pool, &new_user(username)).await.unwrap()
}

/// Lookup rows every movie needs.
pub struct Lookups {
    pub country_id: i64,
    pub director_id: i64,
    pub genre_id: i64,
}

pub async fn seed_lookups(pool: &PgPool) -> Lookups {
    let country = CountryRepo::create(pool, &CreateCountry { name: "France".to_string() })
        .await
        .unwrap();
    let director = DirectorRepo::create(
        pool,
        &CreateDirector {
            name: "Agnes Varda".to_string(),
            bio: None,
            age: Some(90),
            image_path: None,
        },
    )
    .await
    .unwrap();
    let genre = GenreRepo::create(pool, &CreateGenre { name: "Drama".to_string() })
        .await
        .unwrap();
    Lookups {
        country_id: country.id,
        director_id: director.id,
        genre_id: genre.id,
    }
}

pub fn new_movie(lookups: &Lookups, name: &str, year: Option<i16>) -> CreateMovie {
    CreateMovie {
        name: name.to_string(),
        year,
        country_id: lookups.country_id,
        director_id: lookups.director_id,
        genre_id: lookups.genre_id,
        actor_ids: Vec::new(),
        resolution: 1080,
        duration_secs: 5400,
        description: None,
        trailer_path: None,
        image_path: None,
        status: None,
    }
}

pub async fn seed_movie(pool: &PgPool, lookups: &Lookups, name: &str, year: Option<i16>) -> Movie {
    MovieRepo::create(pool, None, &new_movie(lookups, name, year))
        .await
        .unwrap()
}

pub async fn seed_rating(
    pool: &PgPool,
    user_id: i64,
    movie_id: i64,
    parent_id: Option<i64>,
    stars: i16,
) -> Rating {
    RatingRepo::create(
        pool,
        &CreateRating {
            user_id,
            movie_id,
            parent_id,
            stars,
            text: String::new(),
        },
    )
    .await
    .unwrap()
}
