table! {
    images (id) {
        id -> Integer,
        url -> Text,
    }
}

table! {
    votes (id) {
        id -> Integer,
        image_id -> Integer,
        vote_type -> Text,
        created_at -> Timestamp,
    }
}

joinable!(votes -> images (image_id));

allow_tables_to_appear_in_same_query!(images, votes,);
