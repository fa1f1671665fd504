use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, post, web};
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;

use tri_gen_core::corpus::CleaningRules;
use tri_gen_core::{GenError, GenerationConfig, Generator, ScriptTokenizer};

const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	sentence_count: Option<usize>,
	max_output_length: Option<usize>,
	max_steps: Option<usize>,
	separator: Option<String>,
	seed: Option<u64>,
}

impl GenerateParams {
	/// Applies the query overrides on top of the default configuration.
	fn config(&self) -> Result<GenerationConfig, GenError> {
		let mut config = GenerationConfig::default();
		if let Some(n) = self.sentence_count {
			config.set_sentence_count(n)?;
		}
		if let Some(n) = self.max_output_length {
			config.set_max_output_length(n)?;
		}
		if let Some(n) = self.max_steps {
			config.set_max_steps(n)?;
		}
		if let Some(separator) = &self.separator {
			config.separator = separator.clone();
		}
		Ok(config)
	}
}

/// Maps a generation failure to an HTTP response.
fn error_response(e: GenError) -> HttpResponse {
	match e {
		GenError::DegenerateChain | GenError::NoContinuation { .. } => HttpResponse::UnprocessableEntity().body(e.to_string()),
		GenError::Tokenize(_) | GenError::InvalidConfig(_) => HttpResponse::BadRequest().body(e.to_string()),
	}
}

/// HTTP POST endpoint `/v1/generate`
///
/// The body is a post archive (one post per line). Posts are harvested and
/// cleaned, then new text is generated from them and returned as plain text.
#[post("/v1/generate")]
async fn post_generate(query: web::Query<GenerateParams>, body: String) -> impl Responder {
	let config = match query.config() {
		Ok(c) => c,
		Err(e) => return error_response(e),
	};
	let generator = match Generator::with_config(ScriptTokenizer, config) {
		Ok(g) => g,
		Err(e) => return error_response(e),
	};
	let seed = query.seed;

	// The engine is synchronous; the step limit bounds how long this runs.
	let result = web::block(move || {
		let corpus = CleaningRules::default().harvest(body.lines());
		match seed {
			Some(seed) => generator.generate_with(&corpus, &mut StdRng::seed_from_u64(seed)),
			None => generator.generate(&corpus),
		}
	})
	.await;

	match result {
		Ok(Ok(text)) => HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(text),
		Ok(Err(e)) => error_response(e),
		Err(e) => {
			error!("generation task failed: {e}");
			HttpResponse::InternalServerError().body("Generation failed")
		}
	}
}

/// HTTP GET endpoint `/v1/config`
///
/// Returns the default generation configuration.
#[get("/v1/config")]
async fn get_config() -> impl Responder {
	HttpResponse::Ok().json(GenerationConfig::default())
}

/// Main entry point for the server.
///
/// Starts an Actix-web HTTP server exposing the generation endpoints.
///
/// # Notes
/// - The bind address is read from `TRI_GEN_BIND` (default 127.0.0.1:5000).
/// - Log level is controlled by `RUST_LOG` (default `info`).
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let bind = std::env::var("TRI_GEN_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_owned());
	info!("listening on {bind}");

	HttpServer::new(|| {
		App::new()
			.wrap(Logger::default())
			.wrap(Cors::permissive())
			.service(post_generate)
			.service(get_config)
	})
		.bind(bind)?
		.run()
		.await
}

#[cfg(test)]
mod tests {
	use super::*;
	use actix_web::http::StatusCode;
	use actix_web::test;

	#[actix_web::test]
	async fn generate_is_reproducible_with_a_seed() {
		let app = test::init_service(App::new().service(post_generate).service(get_config)).await;
		let body = "犬は走る\n猫は寝る\n犬は寝る";

		let mut outputs = Vec::new();
		for _ in 0..2 {
			let req = test::TestRequest::post().uri("/v1/generate?seed=4").set_payload(body).to_request();
			let resp = test::call_service(&app, req).await;
			assert_eq!(resp.status(), StatusCode::OK);
			outputs.push(test::read_body(resp).await);
		}
		assert_eq!(outputs[0], outputs[1]);
		assert!(!outputs[0].is_empty());
	}

	#[actix_web::test]
	async fn empty_body_gives_empty_text() {
		let app = test::init_service(App::new().service(post_generate).service(get_config)).await;
		let req = test::TestRequest::post().uri("/v1/generate").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::OK);
		assert!(test::read_body(resp).await.is_empty());
	}

	#[actix_web::test]
	async fn degenerate_corpus_is_unprocessable() {
		let app = test::init_service(App::new().service(post_generate).service(get_config)).await;
		let req = test::TestRequest::post().uri("/v1/generate").set_payload("犬\n猫").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
	}

	#[actix_web::test]
	async fn zero_count_is_a_bad_request() {
		let app = test::init_service(App::new().service(post_generate).service(get_config)).await;
		let req = test::TestRequest::post().uri("/v1/generate?sentence_count=0").set_payload("a b").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	}

	#[actix_web::test]
	async fn config_reports_defaults() {
		let app = test::init_service(App::new().service(post_generate).service(get_config)).await;
		let req = test::TestRequest::get().uri("/v1/config").to_request();
		let config: GenerationConfig = test::call_and_read_body_json(&app, req).await;
		assert_eq!(config, GenerationConfig::default());
	}
}
