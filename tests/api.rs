use axum::{
    Router,
    body::{Body, to_bytes},
    extract::Request,
    http::{Response, StatusCode},
};

use sitefeed::{
    api,
    site::Site,
    state,
    storage::{init_db_from_env, migrate},
};
use tower::util::ServiceExt;

struct TestApp {
    router: Router,
}

impl TestApp {
    async fn new() -> Self {
        let db = init_db_from_env().await;

        migrate(&db, "sql/01-CREATE_TABLE.sql")
            .await
            .expect("初始化sql失败");
        migrate(&db, "sql/02-SEED_TEST.sql")
            .await
            .expect("写入测试数据失败");

        let app = state::AppState::new(db, Site::default());

        let router = api::setup_route(app);

        Self { router }
    }

    pub async fn request(&self, req: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(req)
            .await
            .expect("oneshot fail")
    }

    async fn get(&self, uri: &str, code: StatusCode, msg: &str) -> Option<serde_json::Value> {
        let req = Request::get(uri).body(Body::empty()).expect("请求失败");
        let resp = self.request(req).await;
        assert_eq!(resp.status(), code, "{}", msg);
        if code != StatusCode::OK {
            return None;
        }

        let data = to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("读取数据失败");
        Some(serde_json::from_slice(&data).expect("反序列化失败"))
    }

    async fn ids(&self, uri: &str, msg: &str) -> Vec<String> {
        let json = self.get(uri, StatusCode::OK, msg).await.expect("缺少响应体");
        json.as_array()
            .expect("响应应为数组")
            .iter()
            .map(|item| item["id"].as_str().expect("缺少id").to_string())
            .collect()
    }
}

#[tokio::test]
#[ignore = "API测试 依赖真实数据库"]
async fn test_api() {
    let app = TestApp::new().await;

    // 频道列表
    {
        assert_eq!(
            app.ids("/api/news/posts?limit=4", "置顶、精选、其余").await,
            vec!["item2", "item4", "item1", "item3"]
        );
        assert_eq!(
            app.ids("/api/news/posts?limit=100&lang=en", "草稿和未发布的文章不可见")
                .await
                .len(),
            5
        );
        assert_eq!(
            app.ids("/api/column/posts?limit=10", "手动排序丢弃失效引用").await,
            vec!["colA", "colB"]
        );
        app.get("/api/news/posts", StatusCode::BAD_REQUEST, "limit 必填")
            .await;
        app.get("/api/blog/posts?limit=1", StatusCode::NOT_FOUND, "未知频道")
            .await;
    }

    // 单篇文章与语言回退
    {
        let post = app
            .get("/api/news/posts/post-1?lang=en", StatusCode::OK, "获取文章")
            .await
            .expect("缺少响应体");
        assert_eq!(post["id"], "item1", "草稿与正式版本共用slug时返回正式版本");
        assert_eq!(post["title"], "Post 1");
        assert_eq!(post["category"]["title"], "Market Entry");

        let post = app
            .get("/api/news/posts/post-3-zh?lang=zh-cn", StatusCode::OK, "按中文slug获取")
            .await
            .expect("缺少响应体");
        assert_eq!(post["title"], "文章3");
        assert_eq!(post["lang"], "zh-cn");

        let post = app
            .get("/api/news/posts/post-2?lang=en", StatusCode::OK, "缺少英文时回退")
            .await
            .expect("缺少响应体");
        assert_eq!(post["title"], "記事2");

        let post = app
            .get("/api/news/posts/post-5-cn?lang=zh", StatusCode::OK, "按 zh-cn 存储的slug获取")
            .await
            .expect("缺少响应体");
        assert_eq!(post["id"], "item5");
        assert_eq!(post["slug"], "post-5-cn");

        let post = app
            .get("/api/news/posts/post-4?lang=zh-cn", StatusCode::OK, "zh 与 zh-cn 同时存在")
            .await
            .expect("缺少响应体");
        assert_eq!(post["title"], "文章4");

        app.get(
            "/api/news/posts/unpublished",
            StatusCode::NOT_FOUND,
            "未发布的文章",
        )
        .await;
    }

    // 分类与路由
    {
        let categories = app
            .get("/api/categories?lang=ja", StatusCode::OK, "获取分类")
            .await
            .expect("缺少响应体");
        assert_eq!(categories[0]["title"], "市場進出");

        let route = app
            .get(
                "/api/routes/services/market-entry?lang=en",
                StatusCode::OK,
                "旧路径别名",
            )
            .await
            .expect("缺少响应体");
        assert_eq!(route["href"], "/services/TaiwanService?lang=en");
    }
}
