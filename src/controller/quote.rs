use crate::{
    app::App,
    deadline::Deadline,
    model::{ApiResult, Quote},
    service::quote,
};
use rocket::{get, State};

#[get("/quote")]
pub async fn get(app: &State<App>) -> ApiResult<Quote> {
    let request = Deadline::after(app.timeouts.request);
    quote::get(app, request).await.into()
}

#[cfg(test)]
mod test {
    use crate::{
        model::Quote,
        provider::{create_mock_server, upstream_url, USD_BRL},
        test::{conf, setup},
    };
    use rocket::http::Status;
    use std::time::Duration;
    use wiremock::ResponseTemplate;

    #[rocket::async_test]
    async fn get() {
        let upstream = create_mock_server(ResponseTemplate::new(200).set_body_string(USD_BRL)).await;
        let (client, _keep) = setup(&conf(&upstream_url(&upstream))).await;

        let res = client.get("/quote").dispatch().await;

        assert_eq!(res.status(), Status::Ok);
        assert_eq!(
            res.headers().get_one("Content-Type"),
            Some("application/json; charset=utf-8")
        );
        let body = res.into_json::<Quote>().await.unwrap();
        assert_eq!(body.bid, "5.4321");
    }

    #[rocket::async_test]
    async fn get_persists_each_success() {
        let upstream = create_mock_server(ResponseTemplate::new(200).set_body_string(USD_BRL)).await;
        let (client, _keep) = setup(&conf(&upstream_url(&upstream))).await;

        for _ in 0..3 {
            let res = client.get("/quote").dispatch().await;
            assert_eq!(res.status(), Status::Ok);
        }

        let app = client.rocket().state::<crate::app::App>().unwrap();
        let rows = app.repo.select_all().unwrap();
        assert_eq!(3, rows.len());
        assert!(rows.iter().all(|it| it.bid == "5.4321"));
        assert!(rows.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[rocket::async_test]
    async fn get_upstream_timeout() {
        let upstream = create_mock_server(
            ResponseTemplate::new(200)
                .set_body_string(USD_BRL)
                .set_delay(Duration::from_millis(800)),
        )
        .await;
        let (client, _keep) = setup(&conf(&upstream_url(&upstream))).await;

        let res = client.get("/quote").dispatch().await;
        assert_eq!(res.status(), Status::GatewayTimeout);
        assert_eq!(
            res.headers().get_one("Content-Type"),
            Some("application/json; charset=utf-8")
        );

        let app = client.rocket().state::<crate::app::App>().unwrap();
        assert!(app.repo.select_all().unwrap().is_empty());
    }

    #[rocket::async_test]
    async fn get_request_budget_exhausted() {
        let upstream = create_mock_server(ResponseTemplate::new(200).set_body_string(USD_BRL)).await;
        let mut conf = conf(&upstream_url(&upstream));
        conf.request_timeout_ms = 0;
        let (client, _keep) = setup(&conf).await;

        let res = client.get("/quote").dispatch().await;
        assert_eq!(res.status(), Status::GatewayTimeout);
    }

    #[rocket::async_test]
    async fn get_upstream_error() {
        let upstream = create_mock_server(ResponseTemplate::new(503)).await;
        let (client, _keep) = setup(&conf(&upstream_url(&upstream))).await;

        let res = client.get("/quote").dispatch().await;
        assert_eq!(res.status(), Status::InternalServerError);

        // still serving
        let res = client.get("/quote").dispatch().await;
        assert_eq!(res.status(), Status::InternalServerError);
    }

    #[rocket::async_test]
    async fn get_upstream_unreachable() {
        let (client, _keep) = setup(&conf("http://127.0.0.1:9/json/last/USD-BRL")).await;
        let res = client.get("/quote").dispatch().await;
        assert!(res.status() == Status::InternalServerError || res.status() == Status::GatewayTimeout);
    }

    #[rocket::async_test]
    async fn get_upstream_bad_body() {
        let upstream = create_mock_server(
            ResponseTemplate::new(200).set_body_string(r#"{"USDBRL": {"ask": "5.44"}}"#),
        )
        .await;
        let (client, _keep) = setup(&conf(&upstream_url(&upstream))).await;

        let res = client.get("/quote").dispatch().await;
        assert_eq!(res.status(), Status::InternalServerError);
    }

    #[rocket::async_test]
    async fn get_store_failed() {
        let upstream = create_mock_server(ResponseTemplate::new(200).set_body_string(USD_BRL)).await;
        let (client, keep) = setup(&conf(&upstream_url(&upstream))).await;
        keep.execute_batch("DROP TABLE quote").unwrap();

        let res = client.get("/quote").dispatch().await;

        assert_eq!(res.status(), Status::Ok);
        let body = res.into_json::<Quote>().await.unwrap();
        assert_eq!(body.bid, "5.4321");
    }

    #[rocket::async_test]
    async fn get_unknown_route() {
        let upstream = create_mock_server(ResponseTemplate::new(200).set_body_string(USD_BRL)).await;
        let (client, _keep) = setup(&conf(&upstream_url(&upstream))).await;

        let res = client.get("/cotacao").dispatch().await;
        assert_eq!(res.status(), Status::NotFound);
        let body = res.into_string().await.unwrap();
        assert!(body.contains("\"code\":404"));
    }
}
