// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::checks::outcome::Outcome;
use crate::report::RunReport;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use html_escape::encode_text;
use tokio::fs;

/// 渲染 HTML 报告
///
/// 失败条目的截图以 base64 内嵌，报告文件单独可带走。证据文件读不到
/// 只记日志，渲染继续。
pub async fn render(report: &RunReport) -> String {
    let mut rows = String::new();

    for entry in &report.entries {
        let (status, detail) = match &entry.outcome {
            Outcome::Pass => ("pass", String::new()),
            Outcome::Fail(detail) => ("fail", detail.clone()),
            Outcome::Skip(detail) => ("skip", detail.clone()),
        };

        let evidence_cell = match &entry.evidence {
            Some(path) => match fs::read(path).await {
                Ok(bytes) => format!(
                    "<img class=\"evidence\" alt=\"{}\" src=\"data:image/png;base64,{}\"/>",
                    encode_text(&entry.check),
                    BASE64.encode(&bytes)
                ),
                Err(e) => {
                    tracing::warn!("Could not embed evidence {}: {}", path.display(), e);
                    encode_text(&path.display().to_string()).into_owned()
                }
            },
            None => "&ndash;".to_string(),
        };

        rows.push_str(&format!(
            "<tr class=\"{status}\">\
               <td>{suite}</td>\
               <td>{check}</td>\
               <td class=\"status\">{status}</td>\
               <td>{detail}</td>\
               <td>{duration} ms</td>\
               <td>{evidence}</td>\
             </tr>\n",
            status = status,
            suite = encode_text(&entry.suite),
            check = encode_text(&entry.check),
            detail = encode_text(&detail),
            duration = entry.duration_ms,
            evidence = evidence_cell,
        ));
    }

    let finished = report
        .finished_at
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| "-".to_string());

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\"/>\n\
         <title>smokrs report {run_id}</title>\n\
         <style>\n\
           body {{ font-family: sans-serif; margin: 2em; }}\n\
           table {{ border-collapse: collapse; width: 100%; }}\n\
           th, td {{ border: 1px solid #ccc; padding: 0.4em 0.8em; text-align: left; }}\n\
           tr.pass td.status {{ color: #2e7d32; }}\n\
           tr.fail td.status {{ color: #c62828; }}\n\
           tr.skip td.status {{ color: #f9a825; }}\n\
           img.evidence {{ max-width: 320px; }}\n\
         </style>\n\
         </head>\n\
         <body>\n\
         <h1>Smoke run {run_id}</h1>\n\
         <p>Target: {target}</p>\n\
         <p>Started: {started} &middot; Finished: {finished}</p>\n\
         <p>{passed} passed &middot; {failed} failed &middot; {skipped} skipped</p>\n\
         <table>\n\
         <tr><th>Suite</th><th>Check</th><th>Status</th><th>Detail</th>\
         <th>Duration</th><th>Evidence</th></tr>\n\
         {rows}\
         </table>\n\
         </body>\n\
         </html>\n",
        run_id = report.run_id,
        target = encode_text(&report.target),
        started = report.started_at.to_rfc3339(),
        finished = finished,
        passed = report.passed(),
        failed = report.failed(),
        skipped = report.skipped(),
        rows = rows,
    )
}
