pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{event_builder::*, place_builder::*};

pub mod event_builder {

    use super::*;
    use crate::{event::*, geo::*, id::*, rating::*, time::*};

    #[derive(Debug)]
    pub struct EventBuild {
        event: Event,
    }

    impl EventBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.event.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.event.title = title.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.event.description = Some(desc.into());
            self
        }
        pub fn place_id(mut self, id: &str) -> Self {
            self.event.place_id = id.into();
            self
        }
        pub fn category_id(mut self, id: &str) -> Self {
            self.event.category_id = id.into();
            self
        }
        pub fn price(mut self, price: f64) -> Self {
            self.event.price = price;
            self
        }
        pub fn start(mut self, start: Timestamp) -> Self {
            self.event.start = start;
            self
        }
        pub fn end(mut self, end: Timestamp) -> Self {
            self.event.end = end;
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.event.pos = pos;
            self
        }
        pub fn organizer_email(mut self, email: &str) -> Self {
            self.event.organizer.email = email.into();
            self
        }
        pub fn image_url(mut self, url: &str) -> Self {
            self.event.image_url = Some(url.parse().unwrap());
            self
        }
        pub fn created_by(mut self, user_id: &str) -> Self {
            self.event.created_by = user_id.into();
            self
        }
        pub fn rating(mut self, rating: RatingSummary) -> Self {
            self.event.rating = rating;
            self
        }
        pub fn finish(self) -> Event {
            self.event
        }
    }

    impl Builder for Event {
        type Build = EventBuild;
        fn build() -> EventBuild {
            let start = Timestamp::now().truncate_to_secs() + time::Duration::days(1);
            EventBuild {
                event: Event {
                    id: Id::new(),
                    title: "".into(),
                    description: None,
                    place_id: Id::default(),
                    category_id: Id::default(),
                    price: 0.0,
                    start,
                    end: start + time::Duration::hours(2),
                    pos: MapPoint::from_lat_lng_deg(0.0, 0.0),
                    organizer: Organizer {
                        name: "".into(),
                        surname: "".into(),
                        email: "".into(),
                        phone: "".into(),
                    },
                    image_url: None,
                    created_by: Id::default(),
                    rating: RatingSummary::default(),
                },
            }
        }
    }
}

pub mod place_builder {

    use super::*;
    use crate::{geo::*, geometry::*, id::*, place::*};

    #[derive(Debug)]
    pub struct PlaceBuild {
        place: Place,
    }

    impl PlaceBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.place.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.place.name = name.into();
            self
        }
        pub fn kind(mut self, kind: PlaceKind) -> Self {
            self.place.kind = kind;
            self
        }
        pub fn county_id(mut self, county_id: u32) -> Self {
            self.place.county_id = county_id;
            self
        }
        pub fn boundary(mut self, boundary: Boundary) -> Self {
            self.place.boundary = boundary;
            self
        }
        /// A rectangular boundary given by two corners in degrees.
        pub fn rect(self, sw: (f64, f64), ne: (f64, f64)) -> Self {
            let (sw_lat, sw_lng) = sw;
            let (ne_lat, ne_lng) = ne;
            let exterior = LinearRing::new(vec![
                MapPoint::from_lat_lng_deg(sw_lat, sw_lng),
                MapPoint::from_lat_lng_deg(sw_lat, ne_lng),
                MapPoint::from_lat_lng_deg(ne_lat, ne_lng),
                MapPoint::from_lat_lng_deg(ne_lat, sw_lng),
            ]);
            self.boundary(Polygon::new(exterior, vec![]).into())
        }
        pub fn finish(self) -> Place {
            self.place
        }
    }

    impl Builder for Place {
        type Build = PlaceBuild;
        fn build() -> PlaceBuild {
            PlaceBuild {
                place: Place {
                    id: Id::new(),
                    name: "".into(),
                    kind: PlaceKind::Municipality,
                    county_id: 0,
                    boundary: MultiPolygon::default().into(),
                },
            }
            .rect((-1.0, -1.0), (1.0, 1.0))
        }
    }

    #[test]
    fn default_place_contains_origin() {
        let place = Place::build().finish();
        assert!(place.boundary.contains_point(MapPoint::from_lat_lng_deg(0.0, 0.0)));
        assert!(!place.boundary.contains_point(MapPoint::from_lat_lng_deg(2.0, 0.0)));
    }
}
