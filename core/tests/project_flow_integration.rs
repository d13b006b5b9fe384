//! Integration tests for project creation and area selection

mod common;

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};

    use cams_core::{
        DateRangeError, DomainError, ImageryError, NavigationError, Screen,
    };
    use cams_shared::Coordinate;

    use crate::common::{harness, Harness};

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 17, 0, 0).unwrap()
    }

    fn logged_in() -> Harness {
        let mut h = harness();
        let c = &mut h.controller;
        c.login_mut().unwrap().set_email("grower@farm.io");
        c.login_mut().unwrap().set_password("Abcdef1!");
        c.submit_login().unwrap();
        h
    }

    fn on_map() -> Harness {
        let mut h = logged_in();
        let c = &mut h.controller;
        c.open_add_project().unwrap();
        let screen = c.add_project_mut().unwrap();
        screen.set_name("North field");
        screen.set_crop_name("Soybean");
        c.set_project_start_date(day(2024, 1, 1)).unwrap();
        c.set_project_end_date(day(2024, 2, 1)).unwrap();
        c.submit_project().unwrap();
        h
    }

    #[tokio::test]
    async fn test_initial_dates_fail_on_order() {
        let mut h = logged_in();
        let c = &mut h.controller;
        c.open_add_project().unwrap();
        {
            let screen = c.add_project_mut().unwrap();
            screen.set_name("North field");
            screen.set_crop_name("Soybean");
            assert_eq!(screen.start_date(), screen.end_date());
            assert!(screen.can_submit());
        }

        let error = c.submit_project().unwrap_err();
        assert_eq!(error, DomainError::DateRange(DateRangeError::StartNotBeforeEnd));
        assert_eq!(c.current_screen(), Screen::AddProject);

        // The remembered error now keeps the gate closed
        assert_eq!(
            c.submit_project(),
            Err(DomainError::Navigation(NavigationError::GateClosed {
                screen: Screen::AddProject
            }))
        );
    }

    #[tokio::test]
    async fn test_future_end_date_rejected() {
        let mut h = logged_in();
        let c = &mut h.controller;
        c.open_add_project().unwrap();
        c.set_project_start_date(day(2024, 1, 1)).unwrap();
        c.set_project_end_date(day(2025, 1, 1)).unwrap();
        assert_eq!(
            c.add_project().unwrap().date_error(),
            Some(DateRangeError::EndDateInFuture)
        );
    }

    #[tokio::test]
    async fn test_submit_rechecks_against_clock() {
        let mut h = logged_in();
        let c = &mut h.controller;
        c.open_add_project().unwrap();
        let screen = c.add_project_mut().unwrap();
        screen.set_name("North field");
        screen.set_crop_name("Soybean");
        c.set_project_start_date(day(2024, 5, 1)).unwrap();
        c.set_project_end_date(day(2024, 6, 1)).unwrap();
        assert!(c.add_project().unwrap().can_submit());

        // Clock moves back a day before the user submits
        h.clock.advance(Duration::days(-1));
        let error = c.submit_project().unwrap_err();
        assert_eq!(error, DomainError::DateRange(DateRangeError::EndDateInFuture));
    }

    #[tokio::test]
    async fn test_project_added_to_list_and_map_opened() {
        let h = on_map();
        let c = &h.controller;
        assert_eq!(
            c.stack().screens(),
            vec![
                Screen::Login,
                Screen::ProjectList,
                Screen::AddProject,
                Screen::MapSelection
            ]
        );

        let map = c.map_selection().unwrap();
        assert_eq!(map.project().name, "North field");
        assert_eq!(map.region().center, Coordinate::new(37.7749, -122.4194));

        let list = match c.stack().find(Screen::ProjectList) {
            Some(cams_core::ScreenState::ProjectList(list)) => list,
            other => panic!("unexpected entry: {:?}", other),
        };
        assert_eq!(list.projects().len(), 1);
        assert_eq!(list.projects()[0].crop_name, "Soybean");
    }

    #[tokio::test]
    async fn test_resubmit_after_back_updates_same_project() {
        let mut h = on_map();
        let c = &mut h.controller;
        let first_id = c.map_selection().unwrap().project().id;

        assert_eq!(c.back().unwrap(), Screen::AddProject);
        c.add_project_mut().unwrap().set_crop_name("Wheat");
        c.submit_project().unwrap();

        assert_eq!(c.current_screen(), Screen::MapSelection);
        assert_eq!(c.map_selection().unwrap().project().id, first_id);

        let list = match c.stack().find(Screen::ProjectList) {
            Some(cams_core::ScreenState::ProjectList(list)) => list,
            other => panic!("unexpected entry: {:?}", other),
        };
        assert_eq!(list.projects().len(), 1);
        assert_eq!(list.projects()[0].id, first_id);
        assert_eq!(list.projects()[0].crop_name, "Wheat");
    }

    #[tokio::test]
    async fn test_confirm_area_requests_imagery() {
        let mut h = on_map();
        let c = &mut h.controller;

        let map = c.map_selection_mut().unwrap();
        map.add_point(Coordinate::new(37.77, -122.42));
        map.add_point(Coordinate::new(37.78, -122.42));
        assert_eq!(
            c.confirm_area().await.unwrap_err(),
            DomainError::Navigation(NavigationError::GateClosed {
                screen: Screen::MapSelection
            })
        );
        assert!(h.imagery.requests().is_empty());

        c.map_selection_mut()
            .unwrap()
            .add_point(Coordinate::new(37.78, -122.41));
        let job = c.confirm_area().await.unwrap();

        assert_eq!(c.map_selection().unwrap().job(), Some(&job));
        let requests = h.imagery.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].area.len(), 3);
        assert_eq!(requests[0].start_date, day(2024, 1, 1));
        assert_eq!(requests[0].end_date, day(2024, 2, 1));
    }

    #[tokio::test]
    async fn test_imagery_failure_is_inline() {
        let mut h = on_map();
        h.imagery.fail_with(ImageryError::QuotaExceeded);
        let c = &mut h.controller;

        let map = c.map_selection_mut().unwrap();
        map.add_point(Coordinate::new(37.77, -122.42));
        map.add_point(Coordinate::new(37.78, -122.42));
        map.add_point(Coordinate::new(37.78, -122.41));

        let error = c.confirm_area().await.unwrap_err();
        assert_eq!(error, DomainError::Imagery(ImageryError::QuotaExceeded));
        let map = c.map_selection().unwrap();
        assert_eq!(map.submit_error(), Some(&ImageryError::QuotaExceeded));
        assert!(map.job().is_none());
    }
}
