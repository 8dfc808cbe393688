///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (rowid) {
        rowid -> BigInt,
        id -> Text,
        username -> Text,
        email -> Text,
        password -> Text,
    }
}

///////////////////////////////////////////////////////////////////////
// Places
///////////////////////////////////////////////////////////////////////

table! {
    places (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
        kind -> Text,
        county_id -> BigInt,
        boundary -> Text,
    }
}

///////////////////////////////////////////////////////////////////////
// Categories
///////////////////////////////////////////////////////////////////////

table! {
    categories (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
    }
}

///////////////////////////////////////////////////////////////////////
// Events
///////////////////////////////////////////////////////////////////////

table! {
    events (rowid) {
        rowid -> BigInt,
        id -> Text,
        title -> Text,
        description -> Nullable<Text>,
        place_id -> Text,
        category_id -> Text,
        price -> Double,
        date_start -> BigInt,
        date_end -> BigInt,
        lat -> Double,
        lng -> Double,
        organizer_name -> Text,
        organizer_surname -> Text,
        organizer_email -> Text,
        organizer_phone -> Text,
        image_url -> Nullable<Text>,
        created_by -> Text,
        average_rating -> Double,
        reviews_count -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Reviews
///////////////////////////////////////////////////////////////////////

table! {
    reviews (event_id, user_id) {
        event_id -> Text,
        user_id -> Text,
        rating -> SmallInt,
        comment -> Nullable<Text>,
        created_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Wishlist
///////////////////////////////////////////////////////////////////////

table! {
    wishlist (user_id, event_id) {
        user_id -> Text,
        event_id -> Text,
    }
}

///////////////////////////////////////////////////////////////////////

allow_tables_to_appear_in_same_query!(categories, events, places, reviews, users, wishlist,);
